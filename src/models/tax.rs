//! Income tax bracket tables and assessment types
//!
//! Bracket figures are the published 2024 federal and Ontario schedules and
//! the 2025 Alberta schedule, together with each jurisdiction's basic
//! personal amount (the tax-free threshold, applied as a non-refundable
//! credit at the jurisdiction's credit rate).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// One marginal tax bracket; `max` of `None` means unbounded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min: f64,
    pub max: Option<f64>,
    pub rate: f64,
}

/// 2024 federal basic personal amount
pub const FEDERAL_BASIC_PERSONAL_AMOUNT: f64 = 15_705.0;

/// 2024 Ontario basic personal amount
pub const ONTARIO_BASIC_PERSONAL_AMOUNT: f64 = 12_399.0;

/// 2025 Alberta basic personal amount
pub const ALBERTA_BASIC_PERSONAL_AMOUNT: f64 = 22_323.0;

/// 2024 federal tax brackets
pub const FEDERAL_TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket { min: 0.0, max: Some(55_867.0), rate: 0.15 },
    TaxBracket { min: 55_867.0, max: Some(111_733.0), rate: 0.205 },
    TaxBracket { min: 111_733.0, max: Some(173_205.0), rate: 0.26 },
    TaxBracket { min: 173_205.0, max: Some(246_752.0), rate: 0.29 },
    TaxBracket { min: 246_752.0, max: None, rate: 0.33 },
];

/// 2024 Ontario provincial tax brackets
pub const ONTARIO_TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket { min: 0.0, max: Some(51_446.0), rate: 0.0505 },
    TaxBracket { min: 51_446.0, max: Some(102_894.0), rate: 0.0915 },
    TaxBracket { min: 102_894.0, max: Some(150_000.0), rate: 0.1116 },
    TaxBracket { min: 150_000.0, max: Some(220_000.0), rate: 0.1216 },
    TaxBracket { min: 220_000.0, max: None, rate: 0.1316 },
];

/// 2025 Alberta provincial tax brackets
pub const ALBERTA_TAX_BRACKETS: [TaxBracket; 6] = [
    TaxBracket { min: 0.0, max: Some(60_000.0), rate: 0.08 },
    TaxBracket { min: 60_000.0, max: Some(151_234.0), rate: 0.10 },
    TaxBracket { min: 151_234.0, max: Some(181_481.0), rate: 0.12 },
    TaxBracket { min: 181_481.0, max: Some(241_974.0), rate: 0.13 },
    TaxBracket { min: 241_974.0, max: Some(362_961.0), rate: 0.14 },
    TaxBracket { min: 362_961.0, max: None, rate: 0.15 },
];

/// Provinces with a supported tax schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Province {
    #[default]
    Ontario,
    Alberta,
}

impl Province {
    /// This province's bracket schedule
    pub fn brackets(&self) -> &'static [TaxBracket] {
        match self {
            Self::Ontario => &ONTARIO_TAX_BRACKETS,
            Self::Alberta => &ALBERTA_TAX_BRACKETS,
        }
    }

    /// This province's basic personal amount
    pub fn basic_personal_amount(&self) -> f64 {
        match self {
            Self::Ontario => ONTARIO_BASIC_PERSONAL_AMOUNT,
            Self::Alberta => ALBERTA_BASIC_PERSONAL_AMOUNT,
        }
    }

    /// The rate at which the basic personal amount is credited. Alberta's
    /// credit stays at 10% even though its 2025 schedule added an 8%
    /// bottom bracket.
    pub fn credit_rate(&self) -> f64 {
        match self {
            Self::Ontario => 0.0505,
            Self::Alberta => 0.10,
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ontario => "Ontario",
            Self::Alberta => "Alberta",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Province {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ontario" | "on" => Ok(Self::Ontario),
            "alberta" | "ab" => Ok(Self::Alberta),
            _ => Err(BudgetError::UnknownProvince(s.to_string())),
        }
    }
}

/// The result of assessing income tax on a gross income
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxAssessment {
    pub gross_income: f64,
    pub federal_tax: f64,
    pub provincial_tax: f64,
    pub total_tax: f64,
    pub net_income: f64,
    /// Total tax as a percentage of gross income; 0 for non-positive income
    pub effective_rate: f64,
}
