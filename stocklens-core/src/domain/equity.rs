//! EquityPoint — mark-to-market portfolio value at one bar close.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Total simulated portfolio value (cash + position marked at the bar's
/// close), appended once per simulated bar and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub value: f64,
}
