//! Domain types — bars, cleaned history rows, trades, equity points.

pub mod bar;
pub mod equity;
pub mod trade;

pub use bar::{ClosePoint, PriceBar};
pub use equity::EquityPoint;
pub use trade::TradeRecord;
