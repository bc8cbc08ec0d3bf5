/// Decision tree classifier: building, merging and prediction
pub mod classifier;
/// Entropy and information gain
pub mod criterion;
/// Tree nodes
pub mod node;
/// Stopping rules
pub mod params;
/// Text rendering
pub mod render;
/// Best split search
pub mod split;
