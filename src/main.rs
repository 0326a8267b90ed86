use anyhow::Result;
use clap::{Parser, Subcommand};

use fiscalscope::cli::{handle_scenario_command, handle_tax_command, ScenarioCommands, TaxArgs};
use fiscalscope::dataset::Dataset;
use fiscalscope::services::ScenarioEngine;

#[derive(Parser)]
#[command(
    name = "fiscalscope",
    version,
    about = "Federal budget scenario engine and income tax calculator",
    long_about = "fiscalscope evaluates what-if spending-reduction scenarios \
                  against the embedded two-snapshot federal budget dataset and \
                  assesses personal income tax against the published bracket \
                  schedules."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a spending-reduction scenario
    #[command(subcommand)]
    Scenario(ScenarioCommands),

    /// Assess income tax for a gross income
    Tax(TaxArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scenario(cmd) => {
            // Dataset load validates the embedded tables; a failure here is
            // a data-authoring bug and fatal.
            let engine = ScenarioEngine::new(Dataset::canonical()?);
            handle_scenario_command(&engine, cmd)?;
        }
        Commands::Tax(args) => {
            handle_tax_command(args)?;
        }
    }

    Ok(())
}
