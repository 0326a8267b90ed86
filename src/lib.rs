//! fiscalscope - federal budget scenario engine
//!
//! This library powers a budget-transparency tool: it evaluates "what-if"
//! spending-reduction scenarios against an embedded two-snapshot federal
//! budget dataset, and assesses personal income tax against the published
//! bracket schedules.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (budget nodes, categories, reductions, tax)
//! - `dataset`: The embedded, validated spending and revenue trees
//! - `services`: Business logic (scenario engine, tax calculator)
//! - `export`: Chart payload (JSON) and CSV serialization
//! - `display`: Terminal formatting helpers and tables
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use fiscalscope::dataset::Dataset;
//! use fiscalscope::models::{PolicyCategory, ReductionModel};
//! use fiscalscope::services::ScenarioEngine;
//!
//! let engine = ScenarioEngine::new(Dataset::canonical()?);
//! let reductions = ReductionModel::with_defaults()
//!     .with_reduction(PolicyCategory::Health, 10.0);
//! let result = engine.evaluate(&reductions);
//! assert!(result.adjusted_total < result.baseline_total);
//! # Ok::<(), fiscalscope::BudgetError>(())
//! ```

pub mod cli;
pub mod dataset;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{BudgetError, BudgetResult};
