//! CSV export of an evaluated scenario
//!
//! Flattens both trees into one row per leaf: the side (spending or
//! revenue), the full path from the root, the policy category for spending
//! leaves, and the two snapshot amounts. Suitable for spreadsheets and for
//! diffing scenarios.

use std::io::Write;

use crate::error::BudgetResult;
use crate::models::{BudgetNode, PolicyCategory, Snapshot};
use crate::services::ScenarioResult;

/// Path segment separator in the `path` column
const PATH_SEPARATOR: &str = " / ";

/// Write an evaluated scenario as CSV rows, one per leaf
pub fn write_csv<W: Write>(result: &ScenarioResult, writer: W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["side", "path", "name", "category", "baseline", "current"])?;

    write_leaves(
        &mut csv_writer,
        &result.adjusted_spending,
        "spending",
        &mut Vec::new(),
        true,
    )?;
    write_leaves(
        &mut csv_writer,
        &result.revenue,
        "revenue",
        &mut Vec::new(),
        false,
    )?;

    csv_writer.flush()?;
    Ok(())
}

fn write_leaves<W: Write>(
    writer: &mut csv::Writer<W>,
    node: &BudgetNode,
    side: &str,
    path: &mut Vec<String>,
    categorize: bool,
) -> BudgetResult<()> {
    match node {
        BudgetNode::Leaf { name, .. } => {
            let category = if categorize {
                PolicyCategory::classify(name).name()
            } else {
                ""
            };
            let full_path = path.join(PATH_SEPARATOR);
            let baseline = node.amount(Snapshot::Baseline).unwrap_or(0.0).to_string();
            let current = node.amount(Snapshot::Current).unwrap_or(0.0).to_string();
            writer.write_record([
                side,
                full_path.as_str(),
                name.as_str(),
                category,
                baseline.as_str(),
                current.as_str(),
            ])?;
        }
        BudgetNode::Group { name, children } => {
            path.push(name.clone());
            for child in children {
                write_leaves(writer, child, side, path, categorize)?;
            }
            path.pop();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::ReductionModel;
    use crate::services::ScenarioEngine;

    fn sample_result() -> ScenarioResult {
        let spending = BudgetNode::group(
            "Spending",
            vec![
                BudgetNode::leaf("Health Research", 10.0, 10.0),
                BudgetNode::group(
                    "Safety",
                    vec![BudgetNode::leaf("RCMP", 5.14, 5.14)],
                ),
            ],
        );
        let revenue = BudgetNode::group(
            "Revenue",
            vec![BudgetNode::leaf("Goods and Services Tax", 45.0, 50.0)],
        );
        let engine = ScenarioEngine::new(Dataset::from_trees(spending, revenue).unwrap());
        engine.evaluate(&ReductionModel::zeroed())
    }

    #[test]
    fn test_one_row_per_leaf_plus_header() {
        let result = sample_result();
        let mut buffer = Vec::new();
        write_csv(&result, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let expected_rows =
            result.adjusted_spending.leaf_count() + result.revenue.leaf_count() + 1;
        assert_eq!(output.lines().count(), expected_rows);
    }

    #[test]
    fn test_paths_and_categories() {
        let result = sample_result();
        let mut buffer = Vec::new();
        write_csv(&result, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("spending,Spending / Safety,RCMP,Public Safety,5.14,5.14"));
        // Revenue rows carry no category.
        assert!(output.contains("revenue,Revenue,Goods and Services Tax,,45,50"));
    }

    #[test]
    fn test_canonical_dataset_exports() {
        let engine = ScenarioEngine::new(Dataset::canonical().unwrap());
        let result = engine.evaluate(&ReductionModel::with_defaults());

        let mut buffer = Vec::new();
        write_csv(&result, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.lines().count() > 100);
        assert!(output.starts_with("side,path,name,category,baseline,current"));
    }
}
