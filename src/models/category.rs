//! Policy categories and the department classifier
//!
//! Spending reductions are not applied per budget line but per broad policy
//! category. `PolicyCategory::classify` maps a detailed department name from
//! the spending tree onto one of ten categories via an exact, case-sensitive
//! table; anything the table does not know lands in `OtherFederalPrograms`,
//! the catch-all that is never subject to reduction (debt servicing, major
//! transfers, statutory benefits and the like).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// A broad policy grouping used to apply one reduction percentage to many
/// budget lines at once
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PolicyCategory {
    Health,
    PublicSafety,
    SocialServices,
    EconomyInnovation,
    Immigration,
    GovernmentOperations,
    Culture,
    RevenueAdministration,
    InternationalAffairs,
    /// Catch-all for spending off-limits to cuts; always 0% reduction
    OtherFederalPrograms,
}

impl PolicyCategory {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Health,
            Self::PublicSafety,
            Self::SocialServices,
            Self::EconomyInnovation,
            Self::Immigration,
            Self::GovernmentOperations,
            Self::Culture,
            Self::RevenueAdministration,
            Self::InternationalAffairs,
            Self::OtherFederalPrograms,
        ]
    }

    /// The display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::PublicSafety => "Public Safety",
            Self::SocialServices => "Social Services & Employment",
            Self::EconomyInnovation => "Economy + Innovation & Research",
            Self::Immigration => "Immigration & Border Services",
            Self::GovernmentOperations => "Government Operations",
            Self::Culture => "Culture & Official Languages",
            Self::RevenueAdministration => "Revenue & Tax Administration",
            Self::InternationalAffairs => "International Affairs",
            Self::OtherFederalPrograms => "Other Federal Programs",
        }
    }

    /// Whether this category may carry a non-zero reduction
    ///
    /// `OtherFederalPrograms` is exempt: it never appears as a slider and
    /// its effective reduction is always 0%.
    pub fn is_reducible(&self) -> bool {
        !matches!(self, Self::OtherFederalPrograms)
    }

    /// Map a department name from the spending tree to its policy category
    ///
    /// Exact, case-sensitive lookup. Total: unmatched names resolve to
    /// `OtherFederalPrograms` rather than failing.
    pub fn classify(department: &str) -> Self {
        match department {
            "Health Care Systems + Protection"
            | "Food Safety"
            | "Public Health + Disease Prevention"
            | "Health Research" => Self::Health,

            "RCMP"
            | "Corrections"
            | "Justice System"
            | "Community Safety"
            | "CSIS"
            | "Disaster Relief"
            | "Other Public Safety Expenses" => Self::PublicSafety,

            "Employment + Training" | "Housing Assistance" | "Gender Equality" => {
                Self::SocialServices
            }

            "Other Immigration Services"
            | "Border Security"
            | "Settlement Assistance"
            | "Citizenship + Passports"
            | "Visitors, International Students + Temporary Workers"
            | "Interim Housing Assistance" => Self::Immigration,

            "Other International Affairs Activities"
            | "Development, Peace + Security Programming"
            | "Support for Embassies + Canada's Presence Abroad"
            | "International Diplomacy"
            | "Trade and Investment"
            | "International Development Research Centre" => Self::InternationalAffairs,

            "Investment, Growth and Commercialization"
            | "Research"
            | "Statistics Canada"
            | "Other Boards + Councils"
            | "Infrastructure Investments"
            | "Innovative and Sustainable Natural Resources Development"
            | "Nuclear Labs + Decommissioning"
            | "Support for Global Competition"
            | "Natural Resources Science + Risk Mitigation"
            | "Other Natural Resources Management Support"
            | "Transportation"
            | "Coastguard Operations"
            | "Fisheries + Aquatic Ecosystems"
            | "Other Fisheries Expenses"
            | "Agriculture"
            | "Other Environment and Climate Change Programs"
            | "Weather Services"
            | "Nature Conservation"
            | "National Parks"
            | "Space"
            | "Banking + Finance" => Self::EconomyInnovation,

            "Other Public Services + Procurement"
            | "Government IT Operations"
            | "Parliament"
            | "Privy Council Office"
            | "Treasury Board"
            | "Office of the Secretary to the Governor General"
            | "Office of the Chief Electoral Officer" => Self::GovernmentOperations,

            "Official Languages + Culture" => Self::Culture,

            "Revenue Canada" => Self::RevenueAdministration,

            _ => Self::OtherFederalPrograms,
        }
    }
}

impl fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PolicyCategory {
    type Err = BudgetError;

    /// Parse a category by its display name, for CLI input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| BudgetError::UnknownCategory(s.to_string()))
    }
}
