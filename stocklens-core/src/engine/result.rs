//! Backtest result aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{EquityPoint, TradeRecord};

/// Summary performance figures for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub net_pnl: f64,
    pub total_return_pct: f64,
    pub win_rate: f64,
    /// Completed round trips only; a trade still open at series end is
    /// excluded here but still marked to market in the final equity.
    pub total_trades: usize,
    pub initial_capital: f64,
    pub final_equity: f64,
}

/// OHLC row of the simulated window, shaped for the charting library
/// (which keys the x axis on `time`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub time: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Everything a single run produces. All four collections share the
/// lifetime of the run that built them; nothing is reused across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    pub kpis: Kpis,
    pub equity_curve: Vec<EquityPoint>,
    pub trades: Vec<TradeRecord>,
    pub price_data: Vec<PricePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_point_serializes_with_time_key() {
        let point = PricePoint {
            time: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            open: 10.0,
            high: 11.0,
            low: 9.0,
            close: 10.5,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.starts_with("{\"time\":\"2024-02-05\""));
    }

    #[test]
    fn result_roundtrips_through_json() {
        let result = BacktestResult {
            kpis: Kpis {
                net_pnl: 250.0,
                total_return_pct: 2.5,
                win_rate: 100.0,
                total_trades: 1,
                initial_capital: 10_000.0,
                final_equity: 10_250.0,
            },
            equity_curve: vec![],
            trades: vec![],
            price_data: vec![],
        };
        let json = serde_json::to_string(&result).unwrap();
        let deser: BacktestResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, deser);
    }
}
