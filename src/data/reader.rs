use super::classes::ClassSet;
use super::dataset::{Dataset, Number};
use crate::error::TreeError;
use csv::ReaderBuilder;
use nalgebra::{DMatrix, DVector};
use std::io;
use std::path::Path;
use tracing::debug;

/// Reads a labeled dataset from a comma separated file.
///
/// The header row names the features; every column but the last holds a
/// numeric feature and the last column holds the label.
///
/// # Errors
///
/// Fails with `UnknownLabel` for labels outside `classes`, with
/// `InvalidValue` for non-numeric or non-finite (`NaN`, `inf`) feature cells
/// and with `Csv` if the file can't be read or a row has the wrong number of
/// columns.
pub fn read_classification_csv<T: Number>(
    file_path: impl AsRef<Path>,
    classes: &ClassSet,
) -> Result<Dataset<T>, TreeError> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(file_path.as_ref())?;
    debug!(path = %file_path.as_ref().display(), "reading dataset");
    read_records(reader, classes)
}

/// Same as [`read_classification_csv`], reading from any `io::Read`.
pub fn read_classification<T: Number, R: io::Read>(
    source: R,
    classes: &ClassSet,
) -> Result<Dataset<T>, TreeError> {
    let reader = ReaderBuilder::new().has_headers(true).from_reader(source);
    read_records(reader, classes)
}

fn read_records<T: Number, R: io::Read>(
    mut reader: csv::Reader<R>,
    classes: &ClassSet,
) -> Result<Dataset<T>, TreeError> {
    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err(TreeError::InvalidParameter(
            "Expected at least one feature column and a label column.".into(),
        ));
    }
    let dimension = headers.len() - 1;
    let feature_names: Vec<String> = headers.iter().take(dimension).map(String::from).collect();

    let mut features = Vec::new();
    let mut labels = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;

        for (column, cell) in record.iter().take(dimension).enumerate() {
            let invalid = || TreeError::InvalidValue {
                row,
                column,
                value: cell.to_string(),
            };
            let value = cell.trim().parse::<f64>().map_err(|_| invalid())?;
            if !value.is_finite() {
                return Err(invalid());
            }
            features.push(T::from_f64(value).ok_or_else(invalid)?);
        }

        let label = record.get(dimension).ok_or(TreeError::InvalidValue {
            row,
            column: dimension,
            value: String::new(),
        })?;
        labels.push(classes.index_of(label.trim())?);
    }

    let feature_matrix = DMatrix::from_row_slice(labels.len(), dimension, &features);
    let label_vector = DVector::from_vec(labels);

    Dataset::new(feature_names, feature_matrix, label_vector, classes.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    const IRIS_HEAD: &str = "\
sepal_length,sepal_width,petal_length,petal_width,species
5.1,3.5,1.4,0.2,Iris-setosa
7.0,3.2,4.7,1.4,Iris-versicolor
6.3,3.3,6.0,2.5,Iris-virginica
";

    fn classes() -> ClassSet {
        ClassSet::new(["Iris-setosa", "Iris-versicolor", "Iris-virginica"]).unwrap()
    }

    #[test]
    fn test_read_classification() {
        let dataset: Dataset<f64> = read_classification(IRIS_HEAD.as_bytes(), &classes()).unwrap();
        assert_eq!(dataset.nrows(), 3);
        assert_eq!(
            dataset.feature_names(),
            &["sepal_length", "sepal_width", "petal_length", "petal_width"]
        );
        assert_eq!(dataset.x[(1, 2)], 4.7);
        assert_eq!(dataset.y, DVector::from_vec(vec![0, 1, 2]));
    }

    #[test]
    fn test_read_classification_empty_body() {
        let dataset: Dataset<f64> =
            read_classification("a,b,label\n".as_bytes(), &classes()).unwrap();
        assert!(!dataset.is_not_empty());
    }

    #[test]
    fn test_read_classification_unknown_label() {
        let data = "a,label\n1.0,Iris-unknown\n";
        let result: Result<Dataset<f64>, _> = read_classification(data.as_bytes(), &classes());
        assert!(matches!(result, Err(TreeError::UnknownLabel(label)) if label == "Iris-unknown"));
    }

    #[test]
    fn test_read_classification_invalid_value() {
        let data = "a,label\n1.0,Iris-setosa\nabc,Iris-setosa\n";
        let result: Result<Dataset<f64>, _> = read_classification(data.as_bytes(), &classes());
        assert!(matches!(
            result,
            Err(TreeError::InvalidValue { row: 1, column: 0, .. })
        ));
    }

    #[test]
    fn test_read_classification_rejects_non_finite() {
        let data = "a,label\n1.0,Iris-setosa\n2.0,Iris-setosa\nNaN,Iris-setosa\n";
        let result: Result<Dataset<f64>, _> = read_classification(data.as_bytes(), &classes());
        assert!(matches!(
            result,
            Err(TreeError::InvalidValue { row: 2, column: 0, value }) if value == "NaN"
        ));

        for cell in ["inf", "-inf", "nan"] {
            let data = format!("a,label\n{},Iris-setosa\n", cell);
            let result: Result<Dataset<f64>, _> = read_classification(data.as_bytes(), &classes());
            assert!(matches!(result, Err(TreeError::InvalidValue { row: 0, .. })));
        }
    }

    #[test]
    fn test_read_classification_ragged_row() {
        let data = "a,b,label\n1.0,Iris-setosa\n";
        let result: Result<Dataset<f64>, _> = read_classification(data.as_bytes(), &classes());
        assert!(matches!(result, Err(TreeError::Csv(_))));
    }
}
