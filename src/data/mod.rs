/// Fixed, ordered class labels
pub mod classes;
/// Feature matrix with labels, sampling and partitioning
pub mod dataset;
/// Candidate thresholds per feature
pub mod domain;
/// CSV loading
pub mod reader;
/// Single named observations
pub mod sample;
