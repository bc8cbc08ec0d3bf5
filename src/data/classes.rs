use crate::error::TreeError;
use std::collections::HashSet;

/// Fixed, ordered set of class labels.
///
/// Labels are stored as indices into this set everywhere else in the crate.
/// The order given at construction is the enumeration order used whenever
/// classes have to be ranked, in particular for breaking majority-vote ties
/// at the leaves: the class that comes first wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSet {
    labels: Vec<String>,
}

impl ClassSet {
    /// Creates a class set from labels in their enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if no labels are given or a label appears twice.
    pub fn new<I, S>(labels: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(TreeError::InvalidParameter(
                "The class set must contain at least one label.".into(),
            ));
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = labels.iter().find(|label| !seen.insert(label.as_str())) {
            return Err(TreeError::InvalidParameter(format!(
                "Label '{}' appears more than once in the class set.",
                duplicate
            )));
        }

        Ok(Self { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the index of `label`, failing with `UnknownLabel` if it isn't a member.
    pub fn index_of(&self, label: &str) -> Result<usize, TreeError> {
        self.labels
            .iter()
            .position(|known| known == label)
            .ok_or_else(|| TreeError::UnknownLabel(label.to_string()))
    }

    /// Returns the label stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; indices handed out by this set are always valid.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Counts class occurrences, one slot per class in enumeration order.
    pub fn count<'a, I>(&self, classes: I) -> Vec<usize>
    where
        I: IntoIterator<Item = &'a usize>,
    {
        let mut counts = vec![0; self.labels.len()];
        for &class in classes {
            counts[class] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_set_order() {
        let classes = ClassSet::new(["setosa", "versicolor", "virginica"]).unwrap();
        assert_eq!(classes.len(), 3);
        assert_eq!(classes.index_of("versicolor").unwrap(), 1);
        assert_eq!(classes.label(2), "virginica");
    }

    #[test]
    fn test_class_set_unknown_label() {
        let classes = ClassSet::new(["A", "B"]).unwrap();
        let err = classes.index_of("C").unwrap_err();
        assert!(matches!(err, TreeError::UnknownLabel(label) if label == "C"));
    }

    #[test]
    fn test_class_set_rejects_empty_and_duplicates() {
        assert!(ClassSet::new(Vec::<String>::new()).is_err());
        assert!(ClassSet::new(["A", "B", "A"]).is_err());
    }

    #[test]
    fn test_class_set_count() {
        let classes = ClassSet::new(["A", "B", "C"]).unwrap();
        let counts = classes.count(&[0, 2, 2, 0, 0]);
        assert_eq!(counts, vec![3, 0, 2]);
    }
}
