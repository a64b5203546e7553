//! StockLens Core — the historical-price analytics engine.
//!
//! Two independent computations over a cleaned daily price series:
//! - Indicator engine: trailing SMAs, Wilder RSI, and MACD, reported as a
//!   latest-row snapshot plus the cleaned series for charting
//! - Backtest engine: a long-only SMA(50/200) crossover simulation producing
//!   an equity curve, a trade log, and summary KPIs
//!
//! Both consume loosely-typed daily bar records, share one cleaning layer,
//! and return JSON-serializable results. Neither performs I/O; the provider
//! seam ([`data::HistoryProvider`]) is the only boundary to the outside
//! world, and the CSV import helper is the only bundled implementation.

pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod indicators;

pub use error::Error;
