//! Backtest engine — series preparation, the bar-by-bar simulation loop,
//! KPI aggregation, and the provider-driven orchestration wrapper.

pub mod orchestrate;
pub mod result;
pub mod simulate;

pub use orchestrate::{run_sma_crossover_backtest, WARMUP_LOOKBACK_DAYS};
pub use result::{BacktestResult, Kpis, PricePoint};
pub use simulate::{run_backtest, LONG_WINDOW, SHORT_WINDOW};
