use crate::data::dataset::Number;
use crate::error::TreeError;

/// Decision tree node
///
/// An internal node sends samples with `feature < threshold` to `left` and
/// all others to `right`. A leaf predicts `class`, an index into the class set
/// the tree was trained with.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode<T: Number> {
    Leaf {
        class: usize,
        depth: u16,
    },
    Internal {
        feature: String,
        threshold: T,
        left: Box<TreeNode<T>>,
        right: Box<TreeNode<T>>,
        depth: u16,
    },
}

impl<T: Number> TreeNode<T> {
    pub fn depth(&self) -> u16 {
        match self {
            TreeNode::Leaf { depth, .. } | TreeNode::Internal { depth, .. } => *depth,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Returns the predicted class if this node is a leaf.
    pub fn leaf_class(&self) -> Option<usize> {
        match self {
            TreeNode::Leaf { class, .. } => Some(*class),
            TreeNode::Internal { .. } => None,
        }
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Internal { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Depth of the deepest node in this subtree.
    pub fn max_depth(&self) -> u16 {
        match self {
            TreeNode::Leaf { depth, .. } => *depth,
            TreeNode::Internal { left, right, .. } => left.max_depth().max(right.max_depth()),
        }
    }

    /// Walks down to a leaf, reading feature values through `value_of`.
    ///
    /// # Errors
    ///
    /// Fails with `MissingFeature` if `value_of` has no value for a feature on the path.
    pub fn predict_with<F>(&self, mut value_of: F) -> Result<usize, TreeError>
    where
        F: FnMut(&str) -> Option<T>,
    {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { class, .. } => return Ok(*class),
                TreeNode::Internal {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    let value = value_of(feature.as_str())
                        .ok_or_else(|| TreeError::MissingFeature(feature.clone()))?;
                    node = if value < *threshold {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
            }
        }
    }

    /// Collapses every internal node whose children are leaves of the same class.
    ///
    /// Children are processed before their parent, so a collapse can cascade
    /// up to the root in a single call. The collapsed node keeps its depth.
    /// Returns the number of collapsed nodes.
    pub fn merge_identical_leaves(&mut self) -> usize {
        let (merged, collapse) = match self {
            TreeNode::Leaf { .. } => return 0,
            TreeNode::Internal {
                left, right, depth, ..
            } => {
                let merged = left.merge_identical_leaves() + right.merge_identical_leaves();
                let collapse = match (left.leaf_class(), right.leaf_class()) {
                    (Some(l), Some(r)) if l == r => Some((l, *depth)),
                    _ => None,
                };
                (merged, collapse)
            }
        };

        match collapse {
            Some((class, depth)) => {
                *self = TreeNode::Leaf { class, depth };
                merged + 1
            }
            None => merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(class: usize, depth: u16) -> Box<TreeNode<f64>> {
        Box::new(TreeNode::Leaf { class, depth })
    }

    fn internal(
        feature: &str,
        threshold: f64,
        left: Box<TreeNode<f64>>,
        right: Box<TreeNode<f64>>,
        depth: u16,
    ) -> Box<TreeNode<f64>> {
        Box::new(TreeNode::Internal {
            feature: feature.to_string(),
            threshold,
            left,
            right,
            depth,
        })
    }

    #[test]
    fn test_predict_with() {
        let tree = internal("x", 5.0, leaf(0, 1), leaf(1, 1), 0);
        assert_eq!(tree.predict_with(|_| Some(1.0)).unwrap(), 0);
        assert_eq!(tree.predict_with(|_| Some(5.0)).unwrap(), 1);
        assert_eq!(tree.predict_with(|_| Some(7.5)).unwrap(), 1);
    }

    #[test]
    fn test_predict_with_missing_feature() {
        let tree = internal("x", 5.0, leaf(0, 1), leaf(1, 1), 0);
        let result = tree.predict_with(|_| None);
        assert!(matches!(result, Err(TreeError::MissingFeature(name)) if name == "x"));
    }

    #[test]
    fn test_leaf_never_reads_features() {
        let tree = leaf(2, 0);
        assert_eq!(tree.predict_with(|_| None).unwrap(), 2);
    }

    #[test]
    fn test_counts() {
        let tree = internal(
            "x",
            5.0,
            leaf(0, 1),
            internal("y", 1.0, leaf(1, 2), leaf(2, 2), 1),
            0,
        );
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.max_depth(), 2);
        assert_eq!(tree.depth(), 0);
        assert!(!tree.is_leaf());
    }

    #[test]
    fn test_merge_identical_leaves() {
        let mut tree = internal(
            "x",
            5.0,
            leaf(0, 1),
            internal("y", 1.0, leaf(1, 2), leaf(1, 2), 1),
            0,
        );
        assert_eq!(tree.merge_identical_leaves(), 1);

        let expected = internal("x", 5.0, leaf(0, 1), leaf(1, 1), 0);
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_merge_cascades_to_root() {
        let mut tree = internal(
            "x",
            5.0,
            internal("y", 2.0, leaf(1, 2), leaf(1, 2), 1),
            internal("y", 1.0, leaf(1, 2), leaf(1, 2), 1),
            0,
        );
        assert_eq!(tree.merge_identical_leaves(), 3);
        assert_eq!(*tree, TreeNode::Leaf { class: 1, depth: 0 });
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut tree = internal(
            "x",
            5.0,
            internal("y", 2.0, leaf(0, 2), leaf(0, 2), 1),
            internal("y", 1.0, leaf(1, 2), leaf(2, 2), 1),
            0,
        );
        tree.merge_identical_leaves();
        let once = tree.clone();
        assert_eq!(tree.merge_identical_leaves(), 0);
        assert_eq!(tree, once);
    }
}
