//! Structured error types for the analytics core.
//!
//! Both engines return these uniformly; the presentation layer renders them
//! as a short JSON error body or a 4xx response. Display strings are the
//! exact messages end users see.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid historical data provided.")]
    InvalidInput,

    #[error("No valid historical data items found with 'date' and 'close'.")]
    NoUsableRows,

    #[error("No valid historical data found after cleaning and conversion.")]
    NothingAfterCleaning,

    #[error("Historical data is empty or invalid.")]
    EmptyHistory,

    #[error("Historical data is missing required OHLC columns.")]
    MissingOhlcColumns,

    #[error("Not enough historical data for {symbol} to run backtest.")]
    InsufficientHistory { symbol: String },

    #[error("Could not fetch historical data for {symbol}. Check the symbol and asset class.")]
    ProviderEmpty { symbol: String },

    #[error("No historical data available for the selected date range.")]
    EmptyDateRange,

    #[error("csv import error: {0}")]
    CsvImport(String),

    #[error("provider error: {0}")]
    Provider(String),
}
