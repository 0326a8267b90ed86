//! Budget tree node model
//!
//! A budget tree is a nested structure of named nodes. A leaf carries two
//! amount snapshots (prior fiscal year and current fiscal year, in billions
//! of dollars); a group carries only an ordered list of children and derives
//! its value by summing descendant leaves. A node is exactly one of the two
//! shapes, enforced by the enum and re-checked on deserialized input.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{BudgetError, BudgetResult};

/// Selects which fiscal-year amount a computation reads from a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Snapshot {
    /// Prior fiscal year, never modified by reductions
    Baseline,
    /// Current fiscal year, subject to spending reductions
    Current,
}

/// A node in a budget tree
///
/// Serialized as an untagged enum: a JSON object with `baseline`/`current`
/// is a leaf, an object with `children` is a group. Deserialization goes
/// through a shape check so an object carrying both amounts and children,
/// or neither, is rejected rather than silently coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BudgetNode {
    /// An irreducible budget line with two amount snapshots (billions)
    Leaf {
        name: String,
        baseline: f64,
        current: f64,
    },
    /// A category aggregating its children; has no amount of its own
    Group {
        name: String,
        children: Vec<BudgetNode>,
    },
}

impl<'de> Deserialize<'de> for BudgetNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawNode {
            name: String,
            baseline: Option<f64>,
            current: Option<f64>,
            children: Option<Vec<BudgetNode>>,
        }

        let raw = RawNode::deserialize(deserializer)?;
        match (raw.baseline, raw.current, raw.children) {
            (Some(baseline), Some(current), None) => Ok(Self::Leaf {
                name: raw.name,
                baseline,
                current,
            }),
            (None, None, Some(children)) => Ok(Self::Group {
                name: raw.name,
                children,
            }),
            _ => Err(serde::de::Error::custom(format!(
                "node '{}' must carry either both amount snapshots or children, not a mix",
                raw.name
            ))),
        }
    }
}

impl BudgetNode {
    /// Create a leaf node
    pub fn leaf(name: impl Into<String>, baseline: f64, current: f64) -> Self {
        Self::Leaf {
            name: name.into(),
            baseline,
            current,
        }
    }

    /// Create a leaf whose amount is unchanged between the two snapshots
    pub fn flat_leaf(name: impl Into<String>, amount: f64) -> Self {
        Self::leaf(name, amount, amount)
    }

    /// Create a group node
    pub fn group(name: impl Into<String>, children: Vec<BudgetNode>) -> Self {
        Self::Group {
            name: name.into(),
            children,
        }
    }

    /// The node's display name
    pub fn name(&self) -> &str {
        match self {
            Self::Leaf { name, .. } | Self::Group { name, .. } => name,
        }
    }

    /// Whether this node is a leaf
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Read the selected snapshot amount from a leaf; `None` for groups
    pub fn amount(&self, snapshot: Snapshot) -> Option<f64> {
        match self {
            Self::Leaf {
                baseline, current, ..
            } => Some(match snapshot {
                Snapshot::Baseline => *baseline,
                Snapshot::Current => *current,
            }),
            Self::Group { .. } => None,
        }
    }

    /// The node's children; empty slice for leaves
    pub fn children(&self) -> &[BudgetNode] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Group { children, .. } => children,
        }
    }

    /// Total number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(BudgetNode::node_count).sum::<usize>()
    }

    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Group { children, .. } => children.iter().map(BudgetNode::leaf_count).sum(),
        }
    }

    /// Maximum depth of this subtree (a lone leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(BudgetNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Validate the subtree rooted at this node
    ///
    /// Rejects blank names, empty groups, and non-finite leaf amounts.
    /// A failure here signals a data-authoring bug and is fatal to dataset
    /// load; every computation downstream assumes a validated tree.
    pub fn validate(&self) -> BudgetResult<()> {
        if self.name().trim().is_empty() {
            return Err(BudgetError::Dataset("node with empty name".into()));
        }

        match self {
            Self::Leaf {
                name,
                baseline,
                current,
            } => {
                if !baseline.is_finite() || !current.is_finite() {
                    return Err(BudgetError::invalid_node(
                        name.clone(),
                        "leaf amount is not a finite number",
                    ));
                }
                Ok(())
            }
            Self::Group { name, children } => {
                if children.is_empty() {
                    return Err(BudgetError::invalid_node(
                        name.clone(),
                        "group has no children",
                    ));
                }
                for child in children {
                    child.validate()?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for BudgetNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
