//! Data cleaning, CSV import, and the provider seam.

pub mod clean;
pub mod csv;
pub mod provider;

pub use clean::{close_series, ohlc_series};
pub use csv::{read_bar_records, CsvHistoryProvider};
pub use provider::HistoryProvider;
