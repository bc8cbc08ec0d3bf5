use super::dataset::{Dataset, Number};
use crate::error::TreeError;
use std::cmp::Ordering;

/// Candidate split thresholds for each feature.
///
/// Features are kept in insertion order and each feature keeps its values in
/// the order given. Split search walks both orders as-is, so they decide which
/// of several equally good splits is chosen.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureDomain<T: Number> {
    entries: Vec<(String, Vec<T>)>,
}

impl<T: Number> Default for FeatureDomain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Number> FeatureDomain<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Collects the distinct values of every feature of `dataset`, sorted ascending.
    ///
    /// Unordered values such as `NaN` are left out.
    pub fn from_dataset(dataset: &Dataset<T>) -> Self {
        let entries = dataset
            .feature_names()
            .iter()
            .zip(dataset.x.column_iter())
            .map(|(name, column)| {
                let mut unique_values: Vec<_> = column
                    .iter()
                    .cloned()
                    .filter(|value| value.partial_cmp(value).is_some())
                    .collect();
                unique_values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
                unique_values.dedup();
                (name.clone(), unique_values)
            })
            .collect();

        Self { entries }
    }

    /// Adds a feature with its candidate thresholds, replacing any previous entry of the same name.
    pub fn insert(&mut self, feature: impl Into<String>, values: Vec<T>) {
        let feature = feature.into();
        match self.entries.iter_mut().find(|(name, _)| *name == feature) {
            Some(entry) => entry.1 = values,
            None => self.entries.push((feature, values)),
        }
    }

    pub fn values(&self, feature: &str) -> Option<&[T]> {
        self.entries
            .iter()
            .find(|(name, _)| name == feature)
            .map(|(_, values)| values.as_slice())
    }

    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs every feature with its column in `dataset`.
    ///
    /// # Errors
    ///
    /// Fails with `MissingFeature` if `dataset` has no column for one of the features.
    pub fn resolve<'a>(
        &'a self,
        dataset: &Dataset<T>,
    ) -> Result<Vec<ResolvedFeature<'a, T>>, TreeError> {
        self.entries
            .iter()
            .map(|(name, values)| {
                Ok(ResolvedFeature {
                    name,
                    column: dataset.feature_index(name)?,
                    thresholds: values,
                })
            })
            .collect()
    }
}

/// A domain feature bound to a dataset column.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedFeature<'a, T> {
    pub name: &'a str,
    pub column: usize,
    pub thresholds: &'a [T],
}
