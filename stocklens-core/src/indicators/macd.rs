//! Moving Average Convergence/Divergence (MACD).
//!
//! Line: EMA(fast) - EMA(slow). Signal: EMA(signal_period) of the line.
//! Histogram: line - signal. All three NaN-padded and aligned with the
//! input.

use super::ema::ema;

/// The three MACD columns for one input series.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub line: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Compute MACD columns. The line is NaN until the slow EMA seeds; the
/// signal EMA runs over the line's defined suffix, so its own seed window
/// starts there. With the standard (12, 26, 9) parameters the histogram is
/// first defined at index 33.
pub fn macd(values: &[f64], fast: usize, slow: usize, signal_period: usize) -> MacdSeries {
    assert!(fast >= 1, "MACD fast period must be >= 1");
    assert!(slow > fast, "MACD slow period must exceed the fast period");
    assert!(signal_period >= 1, "MACD signal period must be >= 1");

    let n = values.len();
    let fast_ema = ema(values, fast);
    let slow_ema = ema(values, slow);

    let mut line = vec![f64::NAN; n];
    for i in 0..n {
        if !fast_ema[i].is_nan() && !slow_ema[i].is_nan() {
            line[i] = fast_ema[i] - slow_ema[i];
        }
    }

    let mut signal = vec![f64::NAN; n];
    if let Some(start) = line.iter().position(|v| !v.is_nan()) {
        for (offset, value) in ema(&line[start..], signal_period).into_iter().enumerate() {
            signal[start + offset] = value;
        }
    }

    let mut histogram = vec![f64::NAN; n];
    for i in 0..n {
        if !line[i].is_nan() && !signal[i].is_nan() {
            histogram[i] = line[i] - signal[i];
        }
    }

    MacdSeries {
        line,
        signal,
        histogram,
    }
}
