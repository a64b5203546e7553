//! SMA-crossover simulation — long-only, fully invested or flat.
//!
//! The strategy holds exactly one state pair: all cash, or all asset.
//! Entry when the 50-bar SMA is above the 200-bar SMA and the book is flat;
//! full liquidation when it drops below while holding. Equity is marked to
//! market once per bar regardless of trade activity. All accounting is f64
//! end to end.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::result::{BacktestResult, Kpis, PricePoint};
use crate::data::clean::ohlc_series;
use crate::domain::{EquityPoint, PriceBar, TradeRecord};
use crate::error::Error;
use crate::indicators::sma;

/// Fast SMA window of the crossover strategy.
pub const SHORT_WINDOW: usize = 50;
/// Slow SMA window; also the structural warm-up of every run.
pub const LONG_WINDOW: usize = 200;

/// One bar of the simulated window with both SMAs defined.
struct SimRow {
    bar: PriceBar,
    short_sma: f64,
    long_sma: f64,
}

/// Sort and clean the raw history, compute both SMAs over close, and drop
/// every row where either is undefined — the simulation only begins once
/// the slow SMA has a full window behind it.
fn prepare(raw: &[Value]) -> Result<Vec<SimRow>, Error> {
    let bars = ohlc_series(raw)?;
    let closes: Vec<f64> = bars.iter().map(|bar| bar.close).collect();
    let short = sma(&closes, SHORT_WINDOW);
    let long = sma(&closes, LONG_WINDOW);

    Ok(bars
        .into_iter()
        .enumerate()
        .filter_map(|(i, bar)| {
            if short[i].is_nan() || long[i].is_nan() {
                return None;
            }
            Some(SimRow {
                bar,
                short_sma: short[i],
                long_sma: long[i],
            })
        })
        .collect())
}

/// Run the SMA(50/200) crossover backtest over a raw daily history.
pub fn run_backtest(
    symbol: &str,
    raw: &[Value],
    initial_capital: f64,
) -> Result<BacktestResult, Error> {
    let rows = prepare(raw)?;
    if rows.is_empty() {
        warn!(symbol, "not enough historical data to run backtest");
        return Err(Error::InsufficientHistory {
            symbol: symbol.to_string(),
        });
    }

    info!(
        symbol,
        initial_capital,
        bars = rows.len(),
        "running SMA crossover backtest"
    );

    let mut cash = initial_capital;
    let mut position_size = 0.0_f64;
    let mut entry_price = 0.0_f64;
    let mut open_trade: Option<TradeRecord> = None;
    let mut trades: Vec<TradeRecord> = Vec::new();
    let mut equity_curve: Vec<EquityPoint> = Vec::with_capacity(rows.len());

    for row in &rows {
        let price = row.bar.close;

        if row.short_sma > row.long_sma && open_trade.is_none() {
            // Golden side: convert all cash into the asset at this close.
            position_size = cash / price;
            entry_price = price;
            cash = 0.0;
            open_trade = Some(TradeRecord::open(row.bar.date, price));
            debug!(date = %row.bar.date, price, "enter long");
        } else if row.short_sma < row.long_sma && position_size > 0.0 {
            let pnl = (price - entry_price) * position_size;
            cash += position_size * price;
            position_size = 0.0;
            if let Some(mut trade) = open_trade.take() {
                trade.close(row.bar.date, price, pnl);
                trades.push(trade);
            }
            debug!(date = %row.bar.date, price, pnl, "exit long");
        }
        // Equal SMAs: no state change.

        equity_curve.push(EquityPoint {
            date: row.bar.date,
            value: cash + position_size * price,
        });
    }

    // A position still open at the last bar stays open: null exit fields,
    // excluded from completed-trade statistics, marked to market above.
    if let Some(trade) = open_trade.take() {
        trades.push(trade);
    }

    info!(symbol, trades = trades.len(), "backtest complete");
    Ok(aggregate(rows, equity_curve, trades, initial_capital))
}

fn aggregate(
    rows: Vec<SimRow>,
    equity_curve: Vec<EquityPoint>,
    trades: Vec<TradeRecord>,
    initial_capital: f64,
) -> BacktestResult {
    let final_equity = equity_curve
        .last()
        .map(|point| point.value)
        .unwrap_or(initial_capital);
    let net_pnl = final_equity - initial_capital;
    let total_return_pct = if initial_capital > 0.0 {
        net_pnl / initial_capital * 100.0
    } else {
        0.0
    };

    let completed = trades.iter().filter(|t| !t.is_open()).count();
    let winners = trades.iter().filter(|t| t.is_winner()).count();
    let win_rate = if completed > 0 {
        winners as f64 / completed as f64 * 100.0
    } else {
        0.0
    };

    let price_data = rows
        .iter()
        .map(|row| PricePoint {
            time: row.bar.date,
            open: row.bar.open,
            high: row.bar.high,
            low: row.bar.low,
            close: row.bar.close,
        })
        .collect();

    BacktestResult {
        kpis: Kpis {
            net_pnl,
            total_return_pct,
            win_rate,
            total_trades: completed,
            initial_capital,
            final_equity,
        },
        equity_curve,
        trades,
        price_data,
    }
}
