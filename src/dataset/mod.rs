//! The embedded budget dataset
//!
//! The spending and revenue trees are built once from the static tables in
//! this module and validated before use. The pair is logically immutable
//! afterward: scenario evaluation copies, never mutates, so the baseline is
//! always recoverable and a loaded `Dataset` can be shared freely across
//! concurrent scenario evaluations.

pub mod departments;
mod revenue;
mod spending;

use crate::error::BudgetResult;
use crate::models::BudgetNode;

pub use departments::{department_name, department_slug};

/// A validated pair of budget trees: spending and revenue
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    spending: BudgetNode,
    revenue: BudgetNode,
}

impl Dataset {
    /// Load the embedded canonical dataset, validating both trees
    ///
    /// A validation failure signals a data-authoring bug and is fatal.
    pub fn canonical() -> BudgetResult<Self> {
        Self::from_trees(spending::tree(), revenue::tree())
    }

    /// Build a dataset from caller-supplied trees, validating both
    ///
    /// Used by tests and by callers that carry their own figures (for
    /// example a translated rendition of the canonical tables).
    pub fn from_trees(spending: BudgetNode, revenue: BudgetNode) -> BudgetResult<Self> {
        spending.validate()?;
        revenue.validate()?;
        Ok(Self { spending, revenue })
    }

    /// The spending tree
    pub fn spending(&self) -> &BudgetNode {
        &self.spending
    }

    /// The revenue tree
    pub fn revenue(&self) -> &BudgetNode {
        &self.revenue
    }
}
