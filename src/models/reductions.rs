//! Reduction model
//!
//! A reduction model maps each policy category to a spending-reduction
//! percentage. It is scenario-scoped state owned by the caller (one per
//! interactive session) and is only ever replaced wholesale: `with_reduction`
//! returns a new model rather than mutating in place, so a presentation
//! layer can hold several what-if scenarios against the same dataset.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::PolicyCategory;

/// Default reduction applied to every reducible category on a fresh model
///
/// Matches the government's announced 7.5% departmental spending review
/// target; the exempt category always stays at 0%.
pub const DEFAULT_REDUCTION_PCT: f64 = 7.5;

/// Per-category spending-reduction percentages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReductionModel {
    reductions: BTreeMap<PolicyCategory, f64>,
}

impl ReductionModel {
    /// A model with every category at 0%
    pub fn zeroed() -> Self {
        Self {
            reductions: BTreeMap::new(),
        }
    }

    /// A model with every reducible category at the documented default
    pub fn with_defaults() -> Self {
        let reductions = PolicyCategory::all()
            .iter()
            .filter(|c| c.is_reducible())
            .map(|c| (*c, DEFAULT_REDUCTION_PCT))
            .collect();
        Self { reductions }
    }

    /// The reduction percentage for a category
    ///
    /// Missing entries read as 0%, and the exempt category reads as 0%
    /// regardless of stored state, so the model is total.
    pub fn get(&self, category: PolicyCategory) -> f64 {
        if !category.is_reducible() {
            return 0.0;
        }
        self.reductions.get(&category).copied().unwrap_or(0.0)
    }

    /// Return a new model with one category's percentage replaced
    ///
    /// Out-of-range input is clamped to [0, 100] rather than rejected so a
    /// slider drag can never fail. Setting the exempt category is accepted
    /// and ignored.
    pub fn with_reduction(&self, category: PolicyCategory, percentage: f64) -> Self {
        let mut next = self.clone();
        if category.is_reducible() {
            next.reductions.insert(category, percentage.clamp(0.0, 100.0));
        }
        next
    }

    /// Iterate over reducible categories and their current percentages,
    /// in display order
    pub fn entries(&self) -> impl Iterator<Item = (PolicyCategory, f64)> + '_ {
        PolicyCategory::all()
            .iter()
            .filter(|c| c.is_reducible())
            .map(move |c| (*c, self.get(*c)))
    }
}

impl Default for ReductionModel {
    fn default() -> Self {
        Self::with_defaults()
    }
}
