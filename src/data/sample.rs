use super::dataset::Number;

/// A single observation: named feature values in column order plus an optional label.
///
/// Two samples are equal when all of their names, values and labels are equal.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample<T: Number> {
    values: Vec<(String, T)>,
    label: Option<String>,
}

impl<T: Number> Sample<T> {
    /// Creates an unlabeled sample from `(feature name, value)` pairs.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the value of `feature`, if the sample has it.
    pub fn get(&self, feature: &str) -> Option<T> {
        self.values
            .iter()
            .find(|(name, _)| name == feature)
            .map(|&(_, value)| value)
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_lookup() {
        let sample = Sample::new([("petal_length", 1.4), ("petal_width", 0.2)]).with_label("A");
        assert_eq!(sample.get("petal_width"), Some(0.2));
        assert_eq!(sample.get("sepal_width"), None);
        assert_eq!(sample.label(), Some("A"));
        assert_eq!(
            sample.features().collect::<Vec<_>>(),
            vec!["petal_length", "petal_width"]
        );
    }

    #[test]
    fn test_sample_equality_by_content() {
        let a = Sample::new([("x", 1.0)]).with_label("A");
        let b = Sample::new([("x", 1.0)]).with_label("A");
        let c = Sample::new([("x", 1.0)]).with_label("B");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
