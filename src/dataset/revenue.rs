//! Canonical federal revenue tree
//!
//! Same two-snapshot shape as the spending tree. Revenue lines are never
//! subject to slider reductions; the carbon tax lapse and the individual
//! income tax change are reflected directly in the current-year snapshot.

use crate::models::BudgetNode;

fn leaf(name: &str, baseline: f64, current: f64) -> BudgetNode {
    BudgetNode::leaf(name, baseline, current)
}

fn flat(name: &str, amount: f64) -> BudgetNode {
    BudgetNode::flat_leaf(name, amount)
}

fn group(name: &str, children: Vec<BudgetNode>) -> BudgetNode {
    BudgetNode::group(name, children)
}

/// Build the revenue tree
pub(super) fn tree() -> BudgetNode {
    group(
        "Revenue",
        vec![
            group(
                "Other Taxes and Duties",
                vec![
                    flat("Goods and Services Tax", 51.42),
                    group(
                        "Energy Taxes",
                        vec![
                            flat("Excise Tax — Gasoline", 4.33),
                            flat("Excise Tax - Diesel Fuel", 1.12),
                            flat("Excise Tax — Aviation Gasoline and Jet Fuel", 0.14),
                        ],
                    ),
                    flat("Customs Duties", 5.57),
                    group(
                        "Other Excise Taxes and Duties",
                        vec![
                            flat("Excise Duties", 5.33),
                            flat("Air Travellers Charge", 1.5),
                        ],
                    ),
                ],
            ),
            leaf("Individual Income Taxes", 217.7, 212.3),
            flat("Corporate Income Taxes", 82.47),
            flat("Non-resident Income Taxes", 12.54),
            group(
                "Payroll Taxes",
                vec![flat("Employment Insurance Premiums", 29.56)],
            ),
            leaf("Carbon Tax Revenue", 9.86, 0.0),
            group(
                "Other Non-tax Revenue",
                vec![
                    flat(
                        "Crown Corporations and other government business enterprises",
                        3.22,
                    ),
                    flat("Net Foreign Exchange Revenue", 3.4),
                    flat("Return on Investments", 0.88),
                    flat("Sales of Government Goods + Services", 13.99),
                    flat("Miscellaneous revenues", 15.87),
                ],
            ),
        ],
    )
}
