//! Plain-text rendering of a decision tree.
//!
//! Each node takes one line, indented by one tab per level of depth. Internal
//! nodes print their test as a question, leaves print their class label, and
//! children are prefixed with the answer that leads to them:
//!
//! ```text
//! petal_length < 3.0?
//! 	[True] Iris-setosa
//! 	[False] Iris-versicolor
//! ```
use super::node::TreeNode;
use crate::data::classes::ClassSet;
use crate::data::dataset::Number;
use std::fmt::{self, Write};

const LEFT_PREFIX: &str = "[True] ";
const RIGHT_PREFIX: &str = "[False] ";

/// Writes `node` and its subtree to `out`.
pub fn write_tree<T: Number, W: Write>(
    out: &mut W,
    node: &TreeNode<T>,
    classes: &ClassSet,
) -> fmt::Result {
    write_node(out, node, classes, "")
}

/// Renders `node` and its subtree into a new string.
pub fn render_tree<T: Number>(node: &TreeNode<T>, classes: &ClassSet) -> String {
    let mut out = String::new();
    // Writing into a String can't fail.
    let _ = write_tree(&mut out, node, classes);
    out
}

fn write_node<T: Number, W: Write>(
    out: &mut W,
    node: &TreeNode<T>,
    classes: &ClassSet,
    prefix: &str,
) -> fmt::Result {
    let indent = "\t".repeat(node.depth() as usize);
    match node {
        TreeNode::Leaf { class, .. } => {
            writeln!(out, "{}{}{}", indent, prefix, classes.label(*class))
        }
        TreeNode::Internal {
            feature,
            threshold,
            left,
            right,
            ..
        } => {
            writeln!(out, "{}{}{} < {:?}?", indent, prefix, feature, threshold)?;
            write_node(out, left, classes, LEFT_PREFIX)?;
            write_node(out, right, classes, RIGHT_PREFIX)
        }
    }
}
