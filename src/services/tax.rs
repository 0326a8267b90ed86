//! Income tax calculator
//!
//! Progressive bracket arithmetic over the published federal and provincial
//! schedules. Each jurisdiction's basic personal amount is applied as a
//! non-refundable credit valued at the jurisdiction's credit rate, so small
//! incomes floor at zero tax rather than going negative.

use crate::models::tax::{
    TaxBracket, FEDERAL_BASIC_PERSONAL_AMOUNT, FEDERAL_TAX_BRACKETS,
};
use crate::models::{Province, TaxAssessment};

/// Walk a bracket schedule and return the marginal tax on an income
pub fn tax_from_brackets(income: f64, brackets: &[TaxBracket]) -> f64 {
    let mut tax = 0.0;

    for bracket in brackets {
        if income <= bracket.min {
            break;
        }
        let taxable_in_bracket = match bracket.max {
            Some(max) => (income - bracket.min).min(max - bracket.min),
            None => income - bracket.min,
        };
        tax += taxable_in_bracket * bracket.rate;
    }

    tax
}

/// Federal tax on an income, net of the basic personal amount credit
pub fn federal_tax(income: f64) -> f64 {
    let gross = tax_from_brackets(income, &FEDERAL_TAX_BRACKETS);
    let credit = FEDERAL_BASIC_PERSONAL_AMOUNT * FEDERAL_TAX_BRACKETS[0].rate;
    (gross - credit).max(0.0)
}

/// Provincial tax on an income, net of the province's basic personal
/// amount credit
pub fn provincial_tax(income: f64, province: Province) -> f64 {
    let gross = tax_from_brackets(income, province.brackets());
    let credit = province.basic_personal_amount() * province.credit_rate();
    (gross - credit).max(0.0)
}

/// Assess combined federal and provincial tax on a gross income
pub fn assess(income: f64, province: Province) -> TaxAssessment {
    let federal = federal_tax(income);
    let provincial = provincial_tax(income, province);
    let total = federal + provincial;

    TaxAssessment {
        gross_income: income,
        federal_tax: federal,
        provincial_tax: provincial,
        total_tax: total,
        net_income: income - total,
        effective_rate: if income > 0.0 {
            total / income * 100.0
        } else {
            0.0
        },
    }
}
