//! Core data models
//!
//! Value types shared across the crate: the budget tree node, the policy
//! category classifier, the reduction model, and the tax bracket tables.

pub mod category;
pub mod node;
pub mod reductions;
pub mod tax;

pub use category::PolicyCategory;
pub use node::{BudgetNode, Snapshot};
pub use reductions::{ReductionModel, DEFAULT_REDUCTION_PCT};
pub use tax::{Province, TaxAssessment, TaxBracket};
