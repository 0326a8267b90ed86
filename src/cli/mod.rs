//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod scenario;
pub mod tax;

pub use scenario::{handle_scenario_command, ScenarioCommands};
pub use tax::{handle_tax_command, TaxArgs};
