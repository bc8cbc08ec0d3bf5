//! Decision Tree Classifier
use super::{
    criterion::entropy_from_counts,
    node::TreeNode,
    params::TreeParams,
    render::{render_tree, write_tree},
    split::find_best_split,
};
use crate::{
    data::{
        classes::ClassSet,
        dataset::{Dataset, Number},
        domain::{FeatureDomain, ResolvedFeature},
        sample::Sample,
    },
    error::TreeError,
    metrics::confusion::ClassificationMetrics,
};
use nalgebra::DVector;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::fmt;
use tracing::{debug, info};

/// Binary decision tree grown by information gain.
///
/// The tree is built once with [`fit`](Self::fit), may then be simplified with
/// [`merge_identical_leaves`](Self::merge_identical_leaves), and is read-only
/// afterwards.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<T: Number> {
    root: Option<Box<TreeNode<T>>>,
    classes: Option<ClassSet>,
    tree_params: TreeParams,
}

impl<T: Number> Default for DecisionTreeClassifier<T> {
    /// Creates a new instance of the decision tree classifier with default parameters.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Number> ClassificationMetrics for DecisionTreeClassifier<T> {}

impl<T: Number> DecisionTreeClassifier<T> {
    /// Creates a new instance of the decision tree classifier with default parameters.
    pub fn new() -> Self {
        Self {
            root: None,
            classes: None,
            tree_params: TreeParams::new(),
        }
    }

    /// Creates a new instance of the decision tree classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `max_depth` - Nodes at this depth always become leaves. Defaults to 3.
    /// * `min_sample_size` - Nodes with fewer samples always become leaves. Defaults to 4.
    ///
    /// # Errors
    ///
    /// This method will return an error if either parameter is 0.
    pub fn with_params(
        max_depth: Option<u16>,
        min_sample_size: Option<usize>,
    ) -> Result<Self, TreeError> {
        let mut tree = Self::new();

        if let Some(max_depth) = max_depth {
            tree.set_max_depth(max_depth)?;
        }
        if let Some(min_sample_size) = min_sample_size {
            tree.set_min_sample_size(min_sample_size)?;
        }
        Ok(tree)
    }

    pub fn set_max_depth(&mut self, max_depth: u16) -> Result<(), TreeError> {
        self.tree_params.set_max_depth(max_depth)
    }

    pub fn set_min_sample_size(&mut self, min_sample_size: usize) -> Result<(), TreeError> {
        self.tree_params.set_min_sample_size(min_sample_size)
    }

    pub fn max_depth(&self) -> u16 {
        self.tree_params.max_depth()
    }

    pub fn min_sample_size(&self) -> usize {
        self.tree_params.min_sample_size()
    }

    pub fn params(&self) -> &TreeParams {
        &self.tree_params
    }

    /// Returns the root node, if the tree was built.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Returns the class set the tree was trained with.
    pub fn classes(&self) -> Option<&ClassSet> {
        self.classes.as_ref()
    }

    /// Builds the decision tree.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The training samples.
    /// * `domain` - The features to split on, in order, with their candidate thresholds.
    ///
    /// # Returns
    ///
    /// A string indicating that the tree was built successfully.
    ///
    /// # Errors
    ///
    /// Fails with `EmptyDataset` if `dataset` has no rows and with
    /// `MissingFeature` if a feature of `domain` isn't a column of `dataset`.
    pub fn fit(
        &mut self,
        dataset: &Dataset<T>,
        domain: &FeatureDomain<T>,
    ) -> Result<String, TreeError> {
        if !dataset.is_not_empty() {
            return Err(TreeError::EmptyDataset);
        }
        let features = domain.resolve(dataset)?;
        info!(
            samples = dataset.nrows(),
            features = features.len(),
            max_depth = self.max_depth(),
            min_sample_size = self.min_sample_size(),
            "building decision tree"
        );

        let root = self.build_tree(dataset, &features, 0)?;
        info!(
            nodes = root.node_count(),
            leaves = root.leaf_count(),
            depth = root.max_depth(),
            "finished building decision tree"
        );

        self.root = Some(Box::new(root));
        self.classes = Some(dataset.classes().clone());
        Ok("Finished building the tree.".into())
    }

    fn build_tree(
        &self,
        dataset: &Dataset<T>,
        features: &[ResolvedFeature<'_, T>],
        current_depth: u16,
    ) -> Result<TreeNode<T>, TreeError> {
        if !dataset.is_not_empty() {
            return Err(TreeError::EmptyDataset);
        }
        let num_samples = dataset.nrows();
        let class_counts = dataset.classes().count(dataset.y.iter());
        let is_pure = class_counts.iter().filter(|&&count| count > 0).count() == 1;

        if current_depth < self.max_depth() && num_samples >= self.min_sample_size() && !is_pure {
            if let Some(best_split) = find_best_split(dataset, features) {
                if best_split.information_gain > 0.0 {
                    debug!(
                        depth = current_depth,
                        samples = num_samples,
                        feature = best_split.feature,
                        threshold = ?best_split.threshold,
                        gain = best_split.information_gain,
                        "split node"
                    );
                    let (left_child, right_child) =
                        dataset.split_on_threshold(best_split.column, best_split.threshold);
                    let left_node = self.build_tree(&left_child, features, current_depth + 1)?;
                    let right_node = self.build_tree(&right_child, features, current_depth + 1)?;
                    return Ok(TreeNode::Internal {
                        feature: best_split.feature.to_string(),
                        threshold: best_split.threshold,
                        left: Box::new(left_node),
                        right: Box::new(right_node),
                        depth: current_depth,
                    });
                }
            }
        }

        let class = Self::majority_class(&class_counts)?;
        debug!(
            depth = current_depth,
            samples = num_samples,
            class = dataset.classes().label(class),
            entropy = entropy_from_counts(&class_counts),
            "leaf node"
        );
        Ok(TreeNode::Leaf {
            class,
            depth: current_depth,
        })
    }

    /// Index of the most frequent class; ties go to the class listed first.
    fn majority_class(class_counts: &[usize]) -> Result<usize, TreeError> {
        let mut best: Option<(usize, usize)> = None;
        for (class, &count) in class_counts.iter().enumerate() {
            if count > 0 && best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((class, count));
            }
        }
        best.map(|(class, _)| class).ok_or(TreeError::EmptyDataset)
    }

    /// Collapses internal nodes whose two children are leaves predicting the same class.
    ///
    /// # Returns
    ///
    /// The number of collapsed nodes. Running it again on the same tree returns 0.
    ///
    /// # Errors
    ///
    /// This method will return an error if the tree wasn't built yet.
    pub fn merge_identical_leaves(&mut self) -> Result<usize, TreeError> {
        let root = self.root.as_mut().ok_or(TreeError::NotBuilt)?;
        let merged = root.merge_identical_leaves();
        info!(
            merged,
            nodes = root.node_count(),
            "merged identical leaves"
        );
        Ok(merged)
    }

    fn fitted(&self) -> Result<(&TreeNode<T>, &ClassSet), TreeError> {
        match (self.root.as_deref(), self.classes.as_ref()) {
            (Some(root), Some(classes)) => Ok((root, classes)),
            _ => Err(TreeError::NotBuilt),
        }
    }

    /// Predicts the class index of a single sample.
    ///
    /// # Errors
    ///
    /// Fails with `NotBuilt` before [`fit`](Self::fit) and with `MissingFeature`
    /// if the sample lacks a feature tested on its path.
    pub fn predict_class(&self, sample: &Sample<T>) -> Result<usize, TreeError> {
        let (root, _) = self.fitted()?;
        root.predict_with(|feature| sample.get(feature))
    }

    /// Predicts the class label of a single sample.
    ///
    /// # Errors
    ///
    /// Same as [`predict_class`](Self::predict_class).
    pub fn predict(&self, sample: &Sample<T>) -> Result<&str, TreeError> {
        let (root, classes) = self.fitted()?;
        let class = root.predict_with(|feature| sample.get(feature))?;
        Ok(classes.label(class))
    }

    /// Predicts the class index of every row of `dataset`, in row order.
    ///
    /// # Errors
    ///
    /// Fails with `NotBuilt` before [`fit`](Self::fit) and with `MissingFeature`
    /// if `dataset` lacks a column the tree tests.
    pub fn predict_dataset(&self, dataset: &Dataset<T>) -> Result<DVector<usize>, TreeError> {
        let (root, _) = self.fitted()?;
        let predictions = (0..dataset.nrows())
            .into_par_iter()
            .map(|row| {
                root.predict_with(|feature| {
                    dataset
                        .feature_index(feature)
                        .ok()
                        .map(|column| dataset.x[(row, column)])
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DVector::from_vec(predictions))
    }

    /// Fraction of rows of `dataset` whose predicted class matches their label.
    ///
    /// # Errors
    ///
    /// Same as [`predict_dataset`](Self::predict_dataset), and `EmptyDataset` for a dataset without rows.
    pub fn score(&self, dataset: &Dataset<T>) -> Result<f64, TreeError> {
        if !dataset.is_not_empty() {
            return Err(TreeError::EmptyDataset);
        }
        let predictions = self.predict_dataset(dataset)?;
        self.accuracy(&dataset.y, &predictions)
    }

    /// Renders the tree as indented text, one node per line.
    ///
    /// # Errors
    ///
    /// This method will return an error if the tree wasn't built yet.
    pub fn render(&self) -> Result<String, TreeError> {
        let (root, classes) = self.fitted()?;
        Ok(render_tree(root, classes))
    }
}

impl<T: Number> fmt::Display for DecisionTreeClassifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fitted() {
            Ok((root, classes)) => write_tree(f, root, classes),
            Err(err) => writeln!(f, "{}", err),
        }
    }
}
