//! Exhaustive search for the best binary split of a dataset.
use super::criterion::information_gain;
use crate::data::dataset::{Dataset, Number};
use crate::data::domain::ResolvedFeature;
use tracing::trace;

/// The winning feature/threshold pair of a split search.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitCandidate<'a, T> {
    pub feature: &'a str,
    pub column: usize,
    pub threshold: T,
    pub information_gain: f64,
}

/// Class counts on each side of `feature < threshold`.
fn split_counts<T: Number>(dataset: &Dataset<T>, column: usize, threshold: T) -> (Vec<usize>, Vec<usize>) {
    let num_classes = dataset.classes().len();
    let mut left = vec![0; num_classes];
    let mut right = vec![0; num_classes];

    for (value, &class) in dataset.x.column(column).iter().zip(dataset.y.iter()) {
        if *value < threshold {
            left[class] += 1;
        } else {
            right[class] += 1;
        }
    }
    (left, right)
}

/// Information gain of splitting `dataset` into `x[column] < threshold` and `x[column] >= threshold`.
pub fn split_gain<T: Number>(dataset: &Dataset<T>, column: usize, threshold: T) -> f64 {
    let parent = dataset.classes().count(dataset.y.iter());
    let (left, right) = split_counts(dataset, column, threshold);
    information_gain(&parent, &left, &right)
}

/// Tries every threshold of every feature and returns the one with the highest gain.
///
/// Features and thresholds are visited in the order given. The running best
/// starts at a gain of 0 and is replaced by any candidate whose gain is greater
/// than *or equal to* it, so among equally good candidates the last one visited
/// wins. Returns `None` when there was nothing to try.
pub fn find_best_split<'a, T: Number>(
    dataset: &Dataset<T>,
    features: &[ResolvedFeature<'a, T>],
) -> Option<SplitCandidate<'a, T>> {
    let mut best_split: Option<SplitCandidate<'a, T>> = None;
    let mut best_information_gain = 0.0;

    for feature in features {
        for &threshold in feature.thresholds {
            let current_information_gain = split_gain(dataset, feature.column, threshold);
            trace!(
                feature = feature.name,
                threshold = ?threshold,
                gain = current_information_gain,
                "split candidate"
            );

            if current_information_gain >= best_information_gain {
                best_split = Some(SplitCandidate {
                    feature: feature.name,
                    column: feature.column,
                    threshold,
                    information_gain: current_information_gain,
                });
                best_information_gain = current_information_gain;
            }
        }
    }
    best_split
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::classes::ClassSet;
    use crate::data::domain::FeatureDomain;
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, DVector};

    fn dataset(x: &[f64], y: Vec<usize>) -> Dataset<f64> {
        let classes = ClassSet::new(["A", "B", "C"]).unwrap();
        let x = DMatrix::from_row_slice(y.len(), 2, x);
        Dataset::new(vec!["x".into(), "z".into()], x, DVector::from_vec(y), classes).unwrap()
    }

    #[test]
    fn test_split_gain() {
        let dataset = dataset(&[1.0, 0.0, 1.0, 0.0, 5.0, 0.0, 5.0, 0.0], vec![0, 0, 1, 1]);
        assert_relative_eq!(split_gain(&dataset, 0, 5.0), 1.0, epsilon = 1e-12);
        assert_eq!(split_gain(&dataset, 0, 1.0), 0.0);
        assert_eq!(split_gain(&dataset, 1, 0.0), 0.0);
    }

    #[test]
    fn test_find_best_split() {
        let dataset = dataset(&[1.0, 3.0, 2.0, 1.0, 3.0, 2.0, 4.0, 1.0], vec![0, 0, 1, 1]);
        let domain = FeatureDomain::from_dataset(&dataset);
        let features = domain.resolve(&dataset).unwrap();

        let best = find_best_split(&dataset, &features).unwrap();
        assert_eq!(best.feature, "x");
        assert_eq!(best.column, 0);
        assert_eq!(best.threshold, 3.0);
        assert_relative_eq!(best.information_gain, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_find_best_split_last_tie_wins() {
        // Both features separate the classes perfectly.
        let dataset = dataset(&[1.0, 10.0, 1.0, 10.0, 5.0, 20.0, 5.0, 20.0], vec![0, 0, 1, 1]);
        let domain = FeatureDomain::from_dataset(&dataset);
        let features = domain.resolve(&dataset).unwrap();

        let best = find_best_split(&dataset, &features).unwrap();
        assert_eq!(best.feature, "z");
        assert_eq!(best.threshold, 20.0);
    }

    #[test]
    fn test_find_best_split_zero_gain_keeps_last_candidate() {
        let dataset = dataset(&[1.0, 0.0, 2.0, 0.0], vec![2, 2]);
        let domain = FeatureDomain::from_dataset(&dataset);
        let features = domain.resolve(&dataset).unwrap();

        let best = find_best_split(&dataset, &features).unwrap();
        assert_eq!(best.information_gain, 0.0);
        assert_eq!(best.feature, "z");
        assert_eq!(best.threshold, 0.0);
    }

    #[test]
    fn test_find_best_split_nothing_to_try() {
        let dataset = dataset(&[1.0, 0.0, 2.0, 0.0], vec![0, 1]);
        let domain = FeatureDomain::<f64>::new();
        let features = domain.resolve(&dataset).unwrap();
        assert!(find_best_split(&dataset, &features).is_none());
    }
}
