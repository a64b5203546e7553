//! Latest-row indicator snapshot — the indicator engine's public contract.
//!
//! Cleans the raw history, computes gated indicator columns over close, and
//! reports the latest row's values plus the cleaned series for charting.
//! Gates are strict data-sufficiency checks: a series shorter than a window
//! reports `null` for that whole indicator, never a partial value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::data::clean::close_series;
use crate::domain::ClosePoint;
use crate::error::Error;
use crate::indicators::{macd, rsi, sma};

pub const SMA_SHORT_PERIOD: usize = 50;
pub const SMA_LONG_PERIOD: usize = 200;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
/// Both MACD EMAs plus the signal line need this many rows to stabilize
/// before the latest row is trustworthy.
pub const MACD_MIN_ROWS: usize = 35;

/// Latest-row indicator values. Fields the history is too short to support
/// are `None` and serialize as `null` — never omitted, and never NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub last_close: Option<f64>,
    pub sma_50: Option<f64>,
    pub sma_200: Option<f64>,
    pub rsi_14: Option<f64>,
    pub macd_line: Option<f64>,
    pub macd_hist: Option<f64>,
    pub macd_signal: Option<f64>,
    pub last_calculation_date: Option<NaiveDate>,
}

/// Snapshot plus the cleaned history the chart renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    pub indicators: IndicatorSnapshot,
    pub history: Vec<ClosePoint>,
}

/// Compute the indicator snapshot for a raw daily history.
///
/// Pure with respect to external state: no I/O, no input mutation. Any
/// failure is a structured [`Error`], never a panic.
pub fn calculate_indicators(raw: &[Value]) -> Result<IndicatorReport, Error> {
    let history = close_series(raw)?;
    let closes: Vec<f64> = history.iter().map(|point| point.close).collect();
    let rows = closes.len();

    let sma_50 = (rows >= SMA_SHORT_PERIOD).then(|| sma(&closes, SMA_SHORT_PERIOD));
    let sma_200 = (rows >= SMA_LONG_PERIOD).then(|| sma(&closes, SMA_LONG_PERIOD));

    let rsi_14 = if rows >= RSI_PERIOD {
        Some(rsi(&closes, RSI_PERIOD))
    } else {
        warn!(rows, "insufficient history for RSI calculation");
        None
    };

    let macd_columns = if rows >= MACD_MIN_ROWS {
        Some(macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL))
    } else {
        warn!(rows, "insufficient history for MACD calculation");
        None
    };

    let last = rows - 1;
    let latest = &history[last];
    let indicators = IndicatorSnapshot {
        last_close: finite(Some(latest.close)),
        sma_50: finite(sma_50.as_ref().map(|column| column[last])),
        sma_200: finite(sma_200.as_ref().map(|column| column[last])),
        rsi_14: finite(rsi_14.as_ref().map(|column| column[last])),
        macd_line: finite(macd_columns.as_ref().map(|m| m.line[last])),
        macd_hist: finite(macd_columns.as_ref().map(|m| m.histogram[last])),
        macd_signal: finite(macd_columns.as_ref().map(|m| m.signal[last])),
        last_calculation_date: Some(latest.date),
    };

    Ok(IndicatorReport {
        indicators,
        history,
    })
}

/// NaN/∞ normalize to `None`; callers never see a non-finite sentinel.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
