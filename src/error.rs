use thiserror::Error;

/// Errors returned by the dataset, tree and metrics operations.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A tree (or a node of it) was requested for zero samples.
    #[error("Cannot build a tree from an empty dataset.")]
    EmptyDataset,
    /// A sample or dataset lacks a feature the tree requires.
    #[error("Sample is missing feature '{0}'.")]
    MissingFeature(String),
    /// A label outside the fixed class set.
    #[error("Label '{0}' is not part of the class set.")]
    UnknownLabel(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Tree wasn't built yet.")]
    NotBuilt,
    /// A feature cell that couldn't be read as a number.
    #[error("Couldn't parse value '{value}' in row {row}, column {column}.")]
    InvalidValue {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("Predictions and labels are of different sizes.")]
    LengthMismatch,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
