//! Business logic layer
//!
//! The scenario engine (tree reduction and aggregation) and the income tax
//! calculator. Everything here is pure computation over the models.

pub mod scenario;
pub mod tax;

pub use scenario::{
    apply_reductions, sum_tree, CategorySpending, ScenarioEngine, ScenarioResult,
};
