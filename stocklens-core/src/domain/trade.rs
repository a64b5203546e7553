//! TradeRecord — one simulated round trip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single round-trip trade: created open on an entry signal, completed
/// once on the exit signal, immutable thereafter. The exit fields stay
/// `None` for a position still open when the series ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub entry_date: NaiveDate,
    pub entry_price: f64,
    pub exit_date: Option<NaiveDate>,
    pub exit_price: Option<f64>,
    pub pnl: Option<f64>,
}

impl TradeRecord {
    /// Open a new trade at the entry bar's close.
    pub fn open(entry_date: NaiveDate, entry_price: f64) -> Self {
        Self {
            entry_date,
            entry_price,
            exit_date: None,
            exit_price: None,
            pnl: None,
        }
    }

    /// Fill in the exit side. Called exactly once per trade.
    pub fn close(&mut self, exit_date: NaiveDate, exit_price: f64, pnl: f64) {
        self.exit_date = Some(exit_date);
        self.exit_price = Some(exit_price);
        self.pnl = Some(pnl);
    }

    pub fn is_open(&self) -> bool {
        self.exit_date.is_none()
    }

    pub fn is_winner(&self) -> bool {
        matches!(self.pnl, Some(pnl) if pnl > 0.0)
    }
}
