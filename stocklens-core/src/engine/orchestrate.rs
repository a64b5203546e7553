//! Run orchestration — provider fetch, warm-up window, engine dispatch.
//!
//! The only place that touches a data source. The provider arrives as an
//! explicit capability; the engine itself stays I/O-free.

use chrono::{Duration, NaiveDate};
use serde_json::Value;
use tracing::info;

use super::result::BacktestResult;
use super::simulate::run_backtest;
use crate::data::clean::parse_date;
use crate::data::provider::HistoryProvider;
use crate::error::Error;

/// Calendar days of history pulled in front of the requested start so the
/// 200-bar SMA is defined when the requested window opens.
pub const WARMUP_LOOKBACK_DAYS: i64 = 300;

/// Fetch history through `provider`, trim it to the requested window plus
/// warm-up lookback, and run the crossover backtest.
pub fn run_sma_crossover_backtest(
    provider: &dyn HistoryProvider,
    symbol: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    initial_capital: f64,
) -> Result<BacktestResult, Error> {
    info!(
        symbol,
        provider = provider.name(),
        "fetching historical data"
    );
    let records = provider.daily_history(symbol)?;
    if records.is_empty() {
        return Err(Error::ProviderEmpty {
            symbol: symbol.to_string(),
        });
    }

    let window_start = start_date - Duration::days(WARMUP_LOOKBACK_DAYS);
    let windowed: Vec<Value> = records
        .into_iter()
        .filter(|record| {
            record
                .as_object()
                .and_then(|obj| obj.get("date"))
                .and_then(parse_date)
                .is_some_and(|date| date >= window_start && date <= end_date)
        })
        .collect();
    if windowed.is_empty() {
        return Err(Error::EmptyDateRange);
    }

    run_backtest(symbol, &windowed, initial_capital)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StubProvider {
        records: Vec<Value>,
    }

    impl HistoryProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn daily_history(&self, _symbol: &str) -> Result<Vec<Value>, Error> {
            Ok(self.records.clone())
        }
    }

    fn history(days: usize) -> Vec<Value> {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        (0..days)
            .map(|i| {
                json!({
                    "date": (base + Duration::days(i as i64)).to_string(),
                    "open": 99.5,
                    "high": 101.0,
                    "low": 99.0,
                    "close": 100.0,
                })
            })
            .collect()
    }

    #[test]
    fn empty_provider_fails_with_symbol() {
        let provider = StubProvider { records: vec![] };
        let result = run_sma_crossover_backtest(
            &provider,
            "MSFT",
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            10_000.0,
        );
        match result {
            Err(Error::ProviderEmpty { symbol }) => assert_eq!(symbol, "MSFT"),
            other => panic!("expected ProviderEmpty, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_window_fails() {
        let provider = StubProvider {
            records: history(400),
        };
        let result = run_sma_crossover_backtest(
            &provider,
            "MSFT",
            NaiveDate::from_ymd_opt(2035, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2035, 6, 1).unwrap(),
            10_000.0,
        );
        assert!(matches!(result, Err(Error::EmptyDateRange)));
    }

    #[test]
    fn lookback_keeps_enough_bars_to_warm_up() {
        // 600 daily bars from 2020-01-01; request a window starting late
        // enough that the 300-day lookback still feeds the 200-bar SMA.
        let provider = StubProvider {
            records: history(600),
        };
        let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2021, 8, 1).unwrap();
        let result =
            run_sma_crossover_backtest(&provider, "MSFT", start, end, 10_000.0).unwrap();

        // Simulated rows exist, and none precede the lookback-extended start.
        assert!(!result.price_data.is_empty());
        let window_start = start - Duration::days(WARMUP_LOOKBACK_DAYS);
        assert!(result.price_data.iter().all(|p| p.time >= window_start));
        assert!(result.price_data.iter().all(|p| p.time <= end));
        assert_eq!(result.equity_curve.len(), result.price_data.len());
    }

    #[test]
    fn window_end_is_inclusive() {
        let provider = StubProvider {
            records: history(400),
        };
        let start = NaiveDate::from_ymd_opt(2020, 8, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        let result =
            run_sma_crossover_backtest(&provider, "MSFT", start, end, 10_000.0).unwrap();
        let last = result.price_data.last().unwrap().time;
        assert_eq!(last, end.min(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(399)));
    }
}
