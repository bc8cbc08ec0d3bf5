use crate::error::TreeError;

/// Stopping rules for growing a tree.
///
/// A node becomes a leaf once its depth reaches `max_depth` or it holds fewer
/// than `min_sample_size` samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeParams {
    pub max_depth: u16,
    pub min_sample_size: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeParams {
    pub fn new() -> Self {
        Self {
            max_depth: 3,
            min_sample_size: 4,
        }
    }

    pub fn set_max_depth(&mut self, max_depth: u16) -> Result<(), TreeError> {
        if max_depth < 1 {
            return Err(TreeError::InvalidParameter(
                "The maximum depth must be greater than 0.".into(),
            ));
        }
        self.max_depth = max_depth;
        Ok(())
    }

    pub fn set_min_sample_size(&mut self, min_sample_size: usize) -> Result<(), TreeError> {
        if min_sample_size < 1 {
            return Err(TreeError::InvalidParameter(
                "The minimum sample size must be greater than 0.".into(),
            ));
        }
        self.min_sample_size = min_sample_size;
        Ok(())
    }

    pub fn max_depth(&self) -> u16 {
        self.max_depth
    }

    pub fn min_sample_size(&self) -> usize {
        self.min_sample_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = TreeParams::default();
        assert_eq!(params.max_depth(), 3);
        assert_eq!(params.min_sample_size(), 4);
    }

    #[test]
    fn test_params_validation() {
        let mut params = TreeParams::new();
        assert!(params.set_max_depth(0).is_err());
        assert!(params.set_min_sample_size(0).is_err());
        assert_eq!(params, TreeParams::new());

        params.set_max_depth(5).unwrap();
        params.set_min_sample_size(2).unwrap();
        assert_eq!(params.max_depth(), 5);
        assert_eq!(params.min_sample_size(), 2);
    }
}
