//! Tax assessment display

use tabled::settings::{object::Columns, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::{format_dollars, format_percentage};
use crate::models::TaxAssessment;

#[derive(Tabled)]
struct AssessmentRow {
    #[tabled(rename = "Line")]
    line: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Render a tax assessment as a table
pub fn format_assessment(assessment: &TaxAssessment) -> String {
    let rows = vec![
        AssessmentRow {
            line: "Gross income",
            amount: format_dollars(assessment.gross_income),
        },
        AssessmentRow {
            line: "Federal tax",
            amount: format_dollars(assessment.federal_tax),
        },
        AssessmentRow {
            line: "Provincial tax",
            amount: format_dollars(assessment.provincial_tax),
        },
        AssessmentRow {
            line: "Total tax",
            amount: format_dollars(assessment.total_tax),
        },
        AssessmentRow {
            line: "Net income",
            amount: format_dollars(assessment.net_income),
        },
        AssessmentRow {
            line: "Effective rate",
            amount: format_percentage(assessment.effective_rate),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Modify::new(Columns::single(1)).with(Alignment::right()));
    table.to_string()
}
