//! Decision Tree Structures

use serde::{Deserialize, Serialize};

/// A decision tree node, either a split or a leaf.
///
/// Splits compare one feature against a threshold and route to a child by
/// index; leaves carry an additive margin contribution. `leaf` being
/// present is what marks a leaf; the split fields are ignored on leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Feature index to split on
    #[serde(default)]
    pub feature: usize,

    /// Split threshold in raw feature units
    #[serde(default)]
    pub threshold: f64,

    /// Left child index, taken when feature value <= threshold
    #[serde(default)]
    pub left: usize,

    /// Right child index
    #[serde(default)]
    pub right: usize,

    /// Margin contribution (leaves only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf: Option<f64>,
}

impl Node {
    /// Create a split node
    pub fn split(feature: usize, threshold: f64, left: usize, right: usize) -> Self {
        Self {
            feature,
            threshold,
            left,
            right,
            leaf: None,
        }
    }

    /// Create a leaf node
    pub fn leaf(value: f64) -> Self {
        Self {
            feature: 0,
            threshold: 0.0,
            left: 0,
            right: 0,
            leaf: Some(value),
        }
    }

    /// Check if this node is a leaf
    pub fn is_leaf(&self) -> bool {
        self.leaf.is_some()
    }
}

/// A single decision tree; node 0 is the root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Create a new tree from its nodes
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Evaluate this tree on a feature vector.
    ///
    /// Ties go left: `feature <= threshold` routes to the left child.
    /// Structurally broken trees contribute 0; `validate` is run on every
    /// tree before an artifact is accepted, so the guards here never fire
    /// on a loaded model.
    pub fn evaluate(&self, features: &[f64]) -> f64 {
        let mut index = 0usize;

        loop {
            let Some(node) = self.nodes.get(index) else {
                return 0.0;
            };

            if let Some(value) = node.leaf {
                return value;
            }

            let Some(feature_value) = features.get(node.feature) else {
                return 0.0;
            };

            index = if *feature_value <= node.threshold {
                node.left
            } else {
                node.right
            };
        }
    }

    /// Validate tree structure against a feature count.
    ///
    /// Child indices must point strictly forward, which rules out cycles
    /// and bounds traversal depth by the node count.
    pub fn validate(&self, feature_count: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }

        for (i, node) in self.nodes.iter().enumerate() {
            match node.leaf {
                Some(value) => {
                    if !value.is_finite() {
                        return Err(format!("leaf {i} has non-finite value"));
                    }
                }
                None => {
                    if node.feature >= feature_count {
                        return Err(format!(
                            "node {i} splits on feature {} but the model has {feature_count}",
                            node.feature
                        ));
                    }
                    if !node.threshold.is_finite() {
                        return Err(format!("node {i} has non-finite threshold"));
                    }
                    if node.left <= i || node.left >= self.nodes.len() {
                        return Err(format!("node {i} has invalid left child: {}", node.left));
                    }
                    if node.right <= i || node.right >= self.nodes.len() {
                        return Err(format!("node {i} has invalid right child: {}", node.right));
                    }
                }
            }
        }

        Ok(())
    }
}
