//! Chart payload export
//!
//! Builds the JSON document a Sankey chart renderer consumes: the four
//! headline totals plus both trees, with every leaf annotated with a
//! flattened `amount` field carrying its adjusted current-year value.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetNode, Snapshot};
use crate::services::ScenarioResult;

/// A budget node in chart form
///
/// Leaves carry both snapshots plus the flattened `amount` the chart reads;
/// groups carry children only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartNode {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,

    /// The value the chart renders; equals `current` on leaves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ChartNode>>,
}

impl ChartNode {
    /// Convert a budget tree into chart form
    pub fn from_tree(node: &BudgetNode) -> Self {
        match node {
            BudgetNode::Leaf { name, .. } => Self {
                name: name.clone(),
                baseline: node.amount(Snapshot::Baseline),
                current: node.amount(Snapshot::Current),
                amount: node.amount(Snapshot::Current),
                children: None,
            },
            BudgetNode::Group { name, children } => Self {
                name: name.clone(),
                baseline: None,
                current: None,
                amount: None,
                children: Some(children.iter().map(ChartNode::from_tree).collect()),
            },
        }
    }
}

/// The full document handed to the chart renderer and stat cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    /// The larger of spending and revenue, used to scale the diagram
    pub total: f64,
    pub spending: f64,
    pub revenue: f64,
    pub baseline_spending: f64,
    pub deficit: f64,
    pub spending_data: ChartNode,
    pub revenue_data: ChartNode,
}

impl ChartPayload {
    /// Build a payload from an evaluated scenario
    pub fn build(result: &ScenarioResult) -> Self {
        Self {
            total: result.adjusted_total.max(result.revenue_total),
            spending: result.adjusted_total,
            revenue: result.revenue_total,
            baseline_spending: result.baseline_total,
            deficit: result.deficit,
            spending_data: ChartNode::from_tree(&result.adjusted_spending),
            revenue_data: ChartNode::from_tree(&result.revenue),
        }
    }

    /// Serialize the payload as pretty-printed JSON
    pub fn write_json<W: Write>(&self, writer: &mut W) -> BudgetResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writer
            .write_all(b"\n")
            .map_err(|e| BudgetError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::{PolicyCategory, ReductionModel};
    use crate::services::ScenarioEngine;

    fn sample_result() -> ScenarioResult {
        let spending = BudgetNode::group(
            "Spending",
            vec![
                BudgetNode::leaf("Health Research", 10.0, 10.0),
                BudgetNode::leaf("Parliament", 4.0, 5.0),
            ],
        );
        let revenue = BudgetNode::group(
            "Revenue",
            vec![BudgetNode::leaf("Goods and Services Tax", 45.0, 50.0)],
        );
        let engine = ScenarioEngine::new(Dataset::from_trees(spending, revenue).unwrap());
        let reductions = ReductionModel::zeroed().with_reduction(PolicyCategory::Health, 50.0);
        engine.evaluate(&reductions)
    }

    #[test]
    fn test_payload_totals_match_scenario() {
        let result = sample_result();
        let payload = ChartPayload::build(&result);

        assert_eq!(payload.spending, result.adjusted_total);
        assert_eq!(payload.revenue, result.revenue_total);
        assert_eq!(payload.baseline_spending, result.baseline_total);
        assert_eq!(payload.deficit, result.deficit);
        assert_eq!(payload.total, result.adjusted_total.max(result.revenue_total));
    }

    #[test]
    fn test_leaf_amount_equals_adjusted_current() {
        let payload = ChartPayload::build(&sample_result());
        let children = payload.spending_data.children.as_ref().unwrap();

        let health = children.iter().find(|n| n.name == "Health Research").unwrap();
        assert_eq!(health.amount, Some(5.0));
        assert_eq!(health.current, Some(5.0));
        assert_eq!(health.baseline, Some(10.0));
        assert!(health.children.is_none());
    }

    #[test]
    fn test_groups_carry_no_amount() {
        let payload = ChartPayload::build(&sample_result());
        assert!(payload.spending_data.amount.is_none());
        assert!(payload.spending_data.children.is_some());
    }

    #[test]
    fn test_json_output_parses_back() {
        let payload = ChartPayload::build(&sample_result());
        let mut buffer = Vec::new();
        payload.write_json(&mut buffer).unwrap();

        let parsed: ChartPayload = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_serialized_group_omits_amount_fields() {
        let payload = ChartPayload::build(&sample_result());
        let json = serde_json::to_string(&payload.spending_data).unwrap();
        // Root is a group: no amount keys at all before the children array.
        let root_prefix = json.split("children").next().unwrap();
        assert!(!root_prefix.contains("amount"));
        assert!(!root_prefix.contains("baseline"));
    }
}
