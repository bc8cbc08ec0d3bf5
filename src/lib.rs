//! # Rusty-id3
//!
//! `rusty-id3` grows binary decision trees over numeric features using
//! information gain (entropy reduction) as the splitting criterion, merges
//! sibling leaves that predict the same class, and classifies new samples.
//! It also contains the utilities needed around it: CSV loading, seeded
//! train/test splitting and accuracy metrics.
//!
//! ## Getting Started
//!
//! To use `rusty-id3`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-id3 = "*"
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use rusty_id3::data::classes::ClassSet;
//! use rusty_id3::data::dataset::Dataset;
//! use rusty_id3::data::domain::FeatureDomain;
//! use rusty_id3::data::sample::Sample;
//! use rusty_id3::trees::classifier::DecisionTreeClassifier;
//! use nalgebra::{DMatrix, DVector};
//!
//! let classes = ClassSet::new(["A", "B"]).unwrap();
//! let x = DMatrix::from_row_slice(4, 1, &[1.0, 1.0, 5.0, 5.0]);
//! let y = DVector::from_vec(vec![0, 0, 1, 1]);
//! let dataset = Dataset::new(vec!["x".to_string()], x, y, classes).unwrap();
//! let domain = FeatureDomain::from_dataset(&dataset);
//!
//! let mut tree = DecisionTreeClassifier::with_params(Some(3), Some(2)).unwrap();
//! tree.fit(&dataset, &domain).unwrap();
//! tree.merge_identical_leaves().unwrap();
//!
//! let label = tree.predict(&Sample::new([("x", 1.0)])).unwrap();
//! assert_eq!(label, "A");
//! ```

/// Datasets, samples, class sets and data loading
pub mod data;
/// Error type shared by the whole crate
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;

pub use error::TreeError;
