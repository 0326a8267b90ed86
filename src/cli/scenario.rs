//! Scenario CLI commands
//!
//! The terminal stand-in for the slider UI: each `--reduce` flag plays the
//! role of one slider position, and every invocation re-evaluates the full
//! scenario from the immutable dataset.

use clap::{Args, Subcommand, ValueEnum};
use std::fs::File;
use std::io;
use std::path::PathBuf;

use crate::display;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{write_csv, ChartPayload};
use crate::models::{PolicyCategory, ReductionModel};
use crate::services::ScenarioEngine;

/// Scenario subcommands
#[derive(Subcommand)]
pub enum ScenarioCommands {
    /// Show headline totals (spending, revenue, deficit)
    Summary(ScenarioArgs),

    /// Show the per-category spending breakdown
    Categories(ScenarioArgs),

    /// Export the evaluated scenario for a chart renderer or spreadsheet
    Export {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Output file; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Reduction overrides shared by the scenario subcommands
#[derive(Args)]
pub struct ScenarioArgs {
    /// Override a category's reduction percentage (repeatable),
    /// e.g. --reduce "Health=10"
    #[arg(short, long = "reduce", value_name = "CATEGORY=PCT")]
    reduce: Vec<String>,

    /// Start every category at 0% instead of the 7.5% defaults
    #[arg(long)]
    zero: bool,
}

impl ScenarioArgs {
    /// Build the reduction model: defaults (or zeros), then overrides
    pub fn reduction_model(&self) -> BudgetResult<ReductionModel> {
        let mut model = if self.zero {
            ReductionModel::zeroed()
        } else {
            ReductionModel::with_defaults()
        };

        for entry in &self.reduce {
            let (category, percentage) = parse_reduction(entry)?;
            model = model.with_reduction(category, percentage);
        }

        Ok(model)
    }
}

/// Export formats for `scenario export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Csv => "csv",
        };
        write!(f, "{}", name)
    }
}

/// Parse one `CATEGORY=PCT` override
///
/// The percentage must be a number; range is left to the reduction model's
/// clamp so the CLI matches slider behavior.
fn parse_reduction(entry: &str) -> BudgetResult<(PolicyCategory, f64)> {
    let (name, value) = entry.split_once('=').ok_or_else(|| {
        BudgetError::InvalidArgument(format!(
            "expected CATEGORY=PCT, got '{}'",
            entry
        ))
    })?;

    let category: PolicyCategory = name.parse()?;
    let percentage: f64 = value.trim().parse().map_err(|_| {
        BudgetError::InvalidArgument(format!("'{}' is not a valid percentage", value))
    })?;

    Ok((category, percentage))
}

/// Handle a scenario subcommand
pub fn handle_scenario_command(
    engine: &ScenarioEngine,
    command: ScenarioCommands,
) -> BudgetResult<()> {
    match command {
        ScenarioCommands::Summary(args) => {
            let result = engine.evaluate(&args.reduction_model()?);
            println!("{}", display::scenario::format_summary(&result));
        }
        ScenarioCommands::Categories(args) => {
            let breakdown = engine.category_breakdown(&args.reduction_model()?);
            println!("{}", display::scenario::format_breakdown(&breakdown));
        }
        ScenarioCommands::Export {
            scenario,
            format,
            output,
        } => {
            let result = engine.evaluate(&scenario.reduction_model()?);
            let mut writer: Box<dyn io::Write> = match &output {
                Some(path) => Box::new(File::create(path)?),
                None => Box::new(io::stdout()),
            };
            match format {
                ExportFormat::Json => {
                    ChartPayload::build(&result).write_json(&mut writer)?;
                }
                ExportFormat::Csv => {
                    write_csv(&result, &mut writer)?;
                }
            }
            if let Some(path) = output {
                eprintln!("Exported scenario to {}", path.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reduction() {
        let (category, pct) = parse_reduction("Health=10").unwrap();
        assert_eq!(category, PolicyCategory::Health);
        assert_eq!(pct, 10.0);

        let (category, pct) = parse_reduction("Public Safety=2.5").unwrap();
        assert_eq!(category, PolicyCategory::PublicSafety);
        assert_eq!(pct, 2.5);
    }

    #[test]
    fn test_parse_reduction_rejects_bad_input() {
        assert!(matches!(
            parse_reduction("Health"),
            Err(BudgetError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_reduction("Defence=10"),
            Err(BudgetError::UnknownCategory(_))
        ));
        assert!(matches!(
            parse_reduction("Health=lots"),
            Err(BudgetError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_reduction_model_defaults_and_overrides() {
        let args = ScenarioArgs {
            reduce: vec!["Health=12".into()],
            zero: false,
        };
        let model = args.reduction_model().unwrap();
        assert_eq!(model.get(PolicyCategory::Health), 12.0);
        assert_eq!(model.get(PolicyCategory::Culture), 7.5);
    }

    #[test]
    fn test_reduction_model_zero_base() {
        let args = ScenarioArgs {
            reduce: vec![],
            zero: true,
        };
        let model = args.reduction_model().unwrap();
        assert_eq!(model.get(PolicyCategory::Health), 0.0);
    }

    #[test]
    fn test_out_of_range_override_clamps() {
        let args = ScenarioArgs {
            reduce: vec!["Health=250".into()],
            zero: true,
        };
        let model = args.reduction_model().unwrap();
        assert_eq!(model.get(PolicyCategory::Health), 100.0);
    }
}
