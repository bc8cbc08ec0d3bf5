use nalgebra::{DMatrix, DVector};

use crate::error::TreeError;

type ConfusionMatrix = DMatrix<usize>;

pub trait ClassificationMetrics {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// Labels are class indices. Row `i`, column `j` counts the samples of class
    /// `i` that were predicted as class `j`; the matrix is large enough to hold
    /// the highest index seen in either vector.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the two vectors have different lengths.
    fn confusion_matrix(
        &self,
        y_true: &DVector<usize>,
        y_pred: &DVector<usize>,
    ) -> Result<ConfusionMatrix, TreeError> {
        if y_true.len() != y_pred.len() {
            return Err(TreeError::LengthMismatch);
        }

        let num_classes = y_true
            .iter()
            .chain(y_pred.iter())
            .max()
            .map_or(0, |&class| class + 1);

        let mut matrix = DMatrix::zeros(num_classes, num_classes);
        for (&y_t, &y_p) in y_true.iter().zip(y_pred.iter()) {
            matrix[(y_t, y_p)] += 1;
        }

        Ok(matrix)
    }

    /// Computes the accuracy based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors have different lengths or are empty.
    fn accuracy(&self, y_true: &DVector<usize>, y_pred: &DVector<usize>) -> Result<f64, TreeError> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        if y_true.is_empty() {
            return Err(TreeError::EmptyDataset);
        }

        let correct: usize = matrix.diagonal().iter().sum();

        Ok(correct as f64 / y_true.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct Metrics;
    impl ClassificationMetrics for Metrics {}

    #[test]
    fn test_confusion_matrix() {
        let y_true = DVector::from_vec(vec![0, 1, 2, 2, 1]);
        let y_pred = DVector::from_vec(vec![0, 2, 2, 2, 1]);
        let matrix = Metrics.confusion_matrix(&y_true, &y_pred).unwrap();

        let expected = DMatrix::from_row_slice(3, 3, &[1, 0, 0, 0, 1, 1, 0, 0, 2]);
        assert_eq!(matrix, expected);
    }

    #[test]
    fn test_confusion_matrix_size_mismatch() {
        let y_true = DVector::from_vec(vec![0, 1]);
        let y_pred = DVector::from_vec(vec![0]);
        assert!(matches!(
            Metrics.confusion_matrix(&y_true, &y_pred),
            Err(TreeError::LengthMismatch)
        ));
    }

    #[test]
    fn test_accuracy() {
        let y_true = DVector::from_vec(vec![0, 1, 2, 2]);
        let y_pred = DVector::from_vec(vec![0, 2, 2, 2]);
        assert_relative_eq!(Metrics.accuracy(&y_true, &y_pred).unwrap(), 0.75);
    }

    #[test]
    fn test_accuracy_empty() {
        let empty = DVector::<usize>::from_vec(vec![]);
        assert!(Metrics.accuracy(&empty, &empty).is_err());
    }
}
