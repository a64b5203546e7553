//! Price bars — the unit of daily market history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLC bar for a single symbol on a single day.
///
/// Only `close` is meaningful for indicator work; the backtest requires all
/// four price columns. No `open <= high` style sanity check is applied —
/// a row survives cleaning as long as every column parses to a finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// One cleaned `{date, close}` row, retained for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosePoint {
    pub date: NaiveDate,
    pub close: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bar() -> PriceBar {
        PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: 100.0,
            high: 105.0,
            low: 98.0,
            close: 103.0,
        }
    }

    #[test]
    fn bar_serialization_roundtrip() {
        let bar = sample_bar();
        let json = serde_json::to_string(&bar).unwrap();
        let deser: PriceBar = serde_json::from_str(&json).unwrap();
        assert_eq!(bar, deser);
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let point = ClosePoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            close: 103.0,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"2024-01-02\""));
    }
}
