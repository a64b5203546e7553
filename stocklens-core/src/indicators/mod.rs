//! Indicator columns over cleaned close prices.
//!
//! Each module computes one indicator as a NaN-padded `Vec<f64>` aligned
//! with its input: positions before the window fills hold NaN. Columns are
//! computed once per request; only the latest row feeds the snapshot.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod snapshot;

pub use ema::ema;
pub use macd::{macd, MacdSeries};
pub use rsi::rsi;
pub use sma::sma;
pub use snapshot::{calculate_indicators, IndicatorReport, IndicatorSnapshot};

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub(crate) const DEFAULT_EPSILON: f64 = 1e-10;
