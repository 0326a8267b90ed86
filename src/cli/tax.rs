//! Tax CLI command

use clap::Args;

use crate::display;
use crate::error::BudgetResult;
use crate::models::Province;
use crate::services::tax;

/// Arguments for the tax command
#[derive(Args)]
pub struct TaxArgs {
    /// Gross annual income in dollars
    pub income: f64,

    /// Province for the provincial schedule (ontario or alberta)
    #[arg(short, long, default_value = "ontario")]
    pub province: String,
}

/// Handle the tax command
pub fn handle_tax_command(args: TaxArgs) -> BudgetResult<()> {
    let province: Province = args.province.parse()?;
    let assessment = tax::assess(args.income, province);

    println!("Income tax assessment ({})", province);
    println!("{}", display::tax::format_assessment(&assessment));
    Ok(())
}
