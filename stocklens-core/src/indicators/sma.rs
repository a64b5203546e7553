//! Simple Moving Average (SMA).
//!
//! Trailing mean of close prices over a lookback window.
//! First valid value at index period-1.

/// Rolling SMA of `values`, aligned with the input. The first `period - 1`
/// positions are NaN; fewer values than `period` yields an all-NaN column
/// (callers treat that as "indicator unavailable"). Input values are finite
/// after cleaning, so a plain running sum is enough.
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "SMA period must be >= 1");
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < period {
        return result;
    }

    let mut sum: f64 = values[..period].iter().sum();
    result[period - 1] = sum / period as f64;

    for i in period..n {
        sum += values[i] - values[i - period];
        result[i] = sum / period as f64;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn sma_5_basic() {
        let values = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        let result = sma(&values, 5);

        assert_eq!(result.len(), 7);
        for i in 0..4 {
            assert!(result[i].is_nan(), "expected NaN at index {i}");
        }
        assert_approx(result[4], 12.0, DEFAULT_EPSILON);
        assert_approx(result[5], 13.0, DEFAULT_EPSILON);
        assert_approx(result[6], 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_1_is_identity() {
        let values = [100.0, 200.0, 300.0];
        let result = sma(&values, 1);
        assert_approx(result[0], 100.0, DEFAULT_EPSILON);
        assert_approx(result[1], 200.0, DEFAULT_EPSILON);
        assert_approx(result[2], 300.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_too_few_values_is_all_nan() {
        let values = [10.0, 11.0];
        let result = sma(&values, 5);
        assert!(result.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn sma_window_equals_length_is_full_mean() {
        let values: Vec<f64> = (1..=50).map(|v| v as f64).collect();
        let result = sma(&values, 50);
        assert!(result[48].is_nan());
        assert_approx(result[49], 25.5, DEFAULT_EPSILON);
    }

    #[test]
    fn rolling_matches_direct_recompute() {
        let values: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 1.7).sin() * 5.0).collect();
        let result = sma(&values, 7);
        for i in 6..values.len() {
            let direct: f64 = values[i + 1 - 7..=i].iter().sum::<f64>() / 7.0;
            assert_approx(result[i], direct, 1e-9);
        }
    }
}
