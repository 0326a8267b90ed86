//! Scenario export
//!
//! Serializes an evaluated scenario for external consumers: the JSON chart
//! payload for a Sankey renderer, and flat CSV rows for spreadsheets.

pub mod csv;
pub mod json;

pub use self::csv::write_csv;
pub use json::{ChartNode, ChartPayload};
