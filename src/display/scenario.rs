//! Scenario display
//!
//! Renders an evaluated scenario as terminal tables: the four headline
//! totals and the per-category breakdown behind the sliders.

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::{format_billions, format_percentage};
use crate::services::{CategorySpending, ScenarioResult};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Measure")]
    measure: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render the headline totals as a table
pub fn format_summary(result: &ScenarioResult) -> String {
    let deficit_label = if result.deficit >= 0.0 {
        "Deficit"
    } else {
        "Surplus"
    };

    let rows = vec![
        SummaryRow {
            measure: "Baseline spending",
            amount: format_billions(result.baseline_total),
        },
        SummaryRow {
            measure: "Projected spending",
            amount: format_billions(result.adjusted_total),
        },
        SummaryRow {
            measure: "Projected revenue",
            amount: format_billions(result.revenue_total),
        },
        SummaryRow {
            measure: deficit_label,
            amount: format_billions(result.deficit.abs()),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Modify::new(Columns::single(1)).with(Alignment::right()));
    table.to_string()
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Reduction")]
    reduction: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Adjusted")]
    adjusted: String,
    #[tabled(rename = "Savings")]
    savings: String,
}

/// Render the per-category breakdown as a table
pub fn format_breakdown(breakdown: &[CategorySpending]) -> String {
    let rows: Vec<CategoryRow> = breakdown
        .iter()
        .map(|entry| CategoryRow {
            category: entry.category.name(),
            reduction: format_percentage(entry.reduction_pct),
            current: format_billions(entry.current),
            adjusted: format_billions(entry.adjusted),
            savings: format_billions(entry.current - entry.adjusted),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    table.to_string()
}
