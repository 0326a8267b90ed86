//! Scenario engine
//!
//! The core of the crate: pure recursive transforms over budget trees, and
//! the engine that combines them into a what-if scenario result. Evaluation
//! is synchronous and cheap (the dataset is at most a few hundred nodes,
//! five levels deep), so a caller can re-evaluate on every slider tick
//! without debouncing.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::models::{BudgetNode, PolicyCategory, ReductionModel, Snapshot};

/// Sum the selected snapshot over a subtree
///
/// A leaf contributes its snapshot amount; a group contributes the sum of
/// its children in order. Negative amounts (rebates, offsets) flow through
/// without clamping.
pub fn sum_tree(node: &BudgetNode, snapshot: Snapshot) -> f64 {
    match node {
        BudgetNode::Leaf { .. } => node.amount(snapshot).unwrap_or(0.0),
        BudgetNode::Group { children, .. } => {
            children.iter().map(|child| sum_tree(child, snapshot)).sum()
        }
    }
}

/// Apply a reduction model to a spending tree, producing a new tree
///
/// Each leaf's current-year amount is scaled by `1 - pct/100`, where the
/// percentage comes from the reduction model via the leaf's policy category.
/// Baseline amounts, names, and child order are preserved, and the input
/// tree is never mutated, so the baseline stays recoverable across any
/// number of applications. Negative leaves scale proportionally like any
/// other amount (a 10% reduction shrinks a rebate's magnitude by 10%).
pub fn apply_reductions(node: &BudgetNode, reductions: &ReductionModel) -> BudgetNode {
    match node {
        BudgetNode::Leaf {
            name,
            baseline,
            current,
        } => {
            let pct = reductions.get(PolicyCategory::classify(name));
            BudgetNode::Leaf {
                name: name.clone(),
                baseline: *baseline,
                current: current * (1.0 - pct / 100.0),
            }
        }
        BudgetNode::Group { name, children } => BudgetNode::Group {
            name: name.clone(),
            children: children
                .iter()
                .map(|child| apply_reductions(child, reductions))
                .collect(),
        },
    }
}

/// A fully evaluated what-if scenario
///
/// Recomputed on demand, never persisted. `adjusted_spending` carries the
/// untouched baseline snapshot alongside the reduced current snapshot;
/// `revenue` is the dataset's revenue tree, which reductions never touch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Prior-year spending total (invariant under reductions)
    pub baseline_total: f64,
    /// Current-year spending total after reductions
    pub adjusted_total: f64,
    /// Current-year revenue total
    pub revenue_total: f64,
    /// `adjusted_total - revenue_total`; negative means surplus
    pub deficit: f64,
    /// The spending tree with reductions applied
    pub adjusted_spending: BudgetNode,
    /// The revenue tree, untouched by reductions
    pub revenue: BudgetNode,
}

/// Per-category spending totals behind the slider display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: PolicyCategory,
    /// Reduction percentage applied to this category
    pub reduction_pct: f64,
    /// Prior-year total over the category's leaves
    pub baseline: f64,
    /// Current-year total before reduction
    pub current: f64,
    /// Current-year total after reduction
    pub adjusted: f64,
}

/// Evaluates reduction scenarios against a validated dataset
#[derive(Debug, Clone)]
pub struct ScenarioEngine {
    dataset: Dataset,
}

impl ScenarioEngine {
    /// Create an engine over a validated dataset
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// The dataset this engine evaluates against
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Evaluate one scenario
    ///
    /// Deterministic: identical (dataset, reductions) pairs yield identical
    /// results. The revenue path goes through summation only.
    pub fn evaluate(&self, reductions: &ReductionModel) -> ScenarioResult {
        let adjusted_spending = apply_reductions(self.dataset.spending(), reductions);

        let baseline_total = sum_tree(&adjusted_spending, Snapshot::Baseline);
        let adjusted_total = sum_tree(&adjusted_spending, Snapshot::Current);
        let revenue_total = sum_tree(self.dataset.revenue(), Snapshot::Current);

        ScenarioResult {
            baseline_total,
            adjusted_total,
            revenue_total,
            deficit: adjusted_total - revenue_total,
            adjusted_spending,
            revenue: self.dataset.revenue().clone(),
        }
    }

    /// Per-category totals for the spending tree under a reduction model,
    /// in category display order
    pub fn category_breakdown(&self, reductions: &ReductionModel) -> Vec<CategorySpending> {
        let mut totals = vec![(0.0f64, 0.0f64); PolicyCategory::all().len()];
        accumulate_by_category(self.dataset.spending(), &mut totals);

        PolicyCategory::all()
            .iter()
            .zip(totals)
            .map(|(category, (baseline, current))| {
                let pct = reductions.get(*category);
                CategorySpending {
                    category: *category,
                    reduction_pct: pct,
                    baseline,
                    current,
                    adjusted: current * (1.0 - pct / 100.0),
                }
            })
            .collect()
    }
}

fn accumulate_by_category(node: &BudgetNode, totals: &mut [(f64, f64)]) {
    match node {
        BudgetNode::Leaf {
            name,
            baseline,
            current,
        } => {
            let category = PolicyCategory::classify(name);
            let index = PolicyCategory::all()
                .iter()
                .position(|c| c == &category)
                .unwrap_or(PolicyCategory::all().len() - 1);
            totals[index].0 += baseline;
            totals[index].1 += current;
        }
        BudgetNode::Group { children, .. } => {
            for child in children {
                accumulate_by_category(child, totals);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BudgetResult;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn tiny_dataset() -> BudgetResult<Dataset> {
        // "Health Research" classifies to Health, "Parliament" to Government
        // Operations, "Retirement Benefits" to the exempt catch-all.
        let spending = BudgetNode::group(
            "Spending",
            vec![
                BudgetNode::leaf("Health Research", 10.0, 10.0),
                BudgetNode::group(
                    "Operations",
                    vec![
                        BudgetNode::leaf("Parliament", 4.0, 5.0),
                        BudgetNode::leaf("Retirement Benefits", 70.0, 80.0),
                    ],
                ),
            ],
        );
        let revenue = BudgetNode::group(
            "Revenue",
            vec![BudgetNode::leaf("Goods and Services Tax", 45.0, 50.0)],
        );
        Dataset::from_trees(spending, revenue)
    }

    #[test]
    fn test_sum_tree_leaf_and_group() {
        let dataset = tiny_dataset().unwrap();
        assert_close(sum_tree(dataset.spending(), Snapshot::Baseline), 84.0);
        assert_close(sum_tree(dataset.spending(), Snapshot::Current), 95.0);
    }

    #[test]
    fn test_sum_tree_additivity() {
        let dataset = tiny_dataset().unwrap();
        let root = dataset.spending();
        let child_sum: f64 = root
            .children()
            .iter()
            .map(|c| sum_tree(c, Snapshot::Current))
            .sum();
        assert_close(sum_tree(root, Snapshot::Current), child_sum);
    }

    #[test]
    fn test_sum_tree_handles_negative_and_zero_leaves() {
        let tree = BudgetNode::group(
            "Offsets",
            vec![
                BudgetNode::flat_leaf("Quebec Tax Offset", -7.1),
                BudgetNode::flat_leaf("Newfoundland and Labrador EQP", 0.0),
            ],
        );
        assert_close(sum_tree(&tree, Snapshot::Current), -7.1);
    }

    #[test]
    fn test_single_leaf_reduction() {
        // A 20% reduction on a 10.0 leaf yields 8.0; baseline untouched.
        let leaf = BudgetNode::leaf("Health Research", 10.0, 10.0);
        let reductions = ReductionModel::zeroed().with_reduction(PolicyCategory::Health, 20.0);

        let adjusted = apply_reductions(&leaf, &reductions);
        assert_close(adjusted.amount(Snapshot::Current).unwrap(), 8.0);
        assert_close(adjusted.amount(Snapshot::Baseline).unwrap(), 10.0);
    }

    #[test]
    fn test_mixed_category_group_reduction() {
        // 10% on one category, 0% on the other: 100*0.9 + 50 = 140.
        let tree = BudgetNode::group(
            "Mixed",
            vec![
                BudgetNode::leaf("Health Research", 100.0, 100.0),
                BudgetNode::leaf("Parliament", 50.0, 50.0),
            ],
        );
        let reductions = ReductionModel::zeroed().with_reduction(PolicyCategory::Health, 10.0);

        let adjusted = apply_reductions(&tree, &reductions);
        assert_close(sum_tree(&adjusted, Snapshot::Current), 140.0);
    }

    #[test]
    fn test_negative_leaf_scales_proportionally() {
        // A reduced rebate shrinks in magnitude: -4.84 * 0.9 = -4.356.
        let leaf = BudgetNode::leaf("Health Research", -4.84, -4.84);
        let reductions = ReductionModel::zeroed().with_reduction(PolicyCategory::Health, 10.0);

        let adjusted = apply_reductions(&leaf, &reductions);
        assert_close(adjusted.amount(Snapshot::Current).unwrap(), -4.356);
    }

    #[test]
    fn test_unclassified_leaf_is_exempt() {
        let leaf = BudgetNode::leaf("Some Unknown Program", 10.0, 10.0);
        let mut reductions = ReductionModel::zeroed();
        for category in PolicyCategory::all() {
            reductions = reductions.with_reduction(*category, 100.0);
        }

        let adjusted = apply_reductions(&leaf, &reductions);
        assert_close(adjusted.amount(Snapshot::Current).unwrap(), 10.0);
    }

    #[test]
    fn test_apply_reductions_does_not_mutate_input() {
        let dataset = tiny_dataset().unwrap();
        let before = dataset.spending().clone();
        let reductions = ReductionModel::zeroed().with_reduction(PolicyCategory::Health, 50.0);

        let _ = apply_reductions(dataset.spending(), &reductions);
        assert_eq!(dataset.spending(), &before);
    }

    #[test]
    fn test_baseline_invariant_under_repeated_application() {
        let dataset = tiny_dataset().unwrap();
        let original_baseline = sum_tree(dataset.spending(), Snapshot::Baseline);

        let mut tree = dataset.spending().clone();
        for pct in [5.0, 50.0, 100.0] {
            let reductions =
                ReductionModel::zeroed().with_reduction(PolicyCategory::Health, pct);
            tree = apply_reductions(&tree, &reductions);
            assert_close(sum_tree(&tree, Snapshot::Baseline), original_baseline);
        }
    }

    #[test]
    fn test_zero_reduction_identity() {
        let dataset = tiny_dataset().unwrap();
        let adjusted = apply_reductions(dataset.spending(), &ReductionModel::zeroed());
        assert_close(
            sum_tree(&adjusted, Snapshot::Current),
            sum_tree(dataset.spending(), Snapshot::Current),
        );
    }

    #[test]
    fn test_monotonicity_of_adjusted_total() {
        let dataset = Dataset::canonical().unwrap();
        let engine = ScenarioEngine::new(dataset);

        let mut previous = f64::INFINITY;
        for pct in [0.0, 2.5, 7.5, 15.0] {
            let reductions =
                ReductionModel::zeroed().with_reduction(PolicyCategory::Health, pct);
            let result = engine.evaluate(&reductions);
            assert!(
                result.adjusted_total <= previous,
                "adjusted total grew when the reduction increased to {}%",
                pct
            );
            previous = result.adjusted_total;
        }
    }

    #[test]
    fn test_revenue_is_never_reduced() {
        let dataset = tiny_dataset().unwrap();
        let engine = ScenarioEngine::new(dataset);

        let mut harsh = ReductionModel::zeroed();
        for category in PolicyCategory::all() {
            harsh = harsh.with_reduction(*category, 100.0);
        }

        let result = engine.evaluate(&harsh);
        assert_close(result.revenue_total, 50.0);
    }

    #[test]
    fn test_deficit_derivation() {
        let dataset = tiny_dataset().unwrap();
        let engine = ScenarioEngine::new(dataset);

        let result = engine.evaluate(&ReductionModel::zeroed());
        assert_close(result.deficit, result.adjusted_total - result.revenue_total);
        assert_close(result.deficit, 95.0 - 50.0);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let engine = ScenarioEngine::new(Dataset::canonical().unwrap());
        let reductions = ReductionModel::with_defaults()
            .with_reduction(PolicyCategory::PublicSafety, 12.5);

        let first = engine.evaluate(&reductions);
        let second = engine.evaluate(&reductions);
        assert_eq!(first, second);
    }

    #[test]
    fn test_category_breakdown_totals() {
        let dataset = tiny_dataset().unwrap();
        let engine = ScenarioEngine::new(dataset);
        let reductions = ReductionModel::zeroed().with_reduction(PolicyCategory::Health, 50.0);

        let breakdown = engine.category_breakdown(&reductions);
        assert_eq!(breakdown.len(), PolicyCategory::all().len());

        let health = breakdown
            .iter()
            .find(|b| b.category == PolicyCategory::Health)
            .unwrap();
        assert_close(health.current, 10.0);
        assert_close(health.adjusted, 5.0);

        let other = breakdown
            .iter()
            .find(|b| b.category == PolicyCategory::OtherFederalPrograms)
            .unwrap();
        assert_close(other.current, 80.0);
        assert_close(other.adjusted, 80.0);

        // Breakdown rows account for every spending leaf.
        let breakdown_total: f64 = breakdown.iter().map(|b| b.adjusted).sum();
        let result = engine.evaluate(&reductions);
        assert_close(breakdown_total, result.adjusted_total);
    }

    #[test]
    fn test_canonical_defaults_reduce_spending() {
        let engine = ScenarioEngine::new(Dataset::canonical().unwrap());

        let untouched = engine.evaluate(&ReductionModel::zeroed());
        let defaults = engine.evaluate(&ReductionModel::with_defaults());

        assert!(defaults.adjusted_total < untouched.adjusted_total);
        assert_close(defaults.baseline_total, untouched.baseline_total);
        assert_close(defaults.revenue_total, untouched.revenue_total);
    }
}
