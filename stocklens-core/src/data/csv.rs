//! CSV import — the file-backed history source.
//!
//! Expects a headered file with at least `date,open,high,low,close` columns.
//! Cells pass through as strings and the cleaning layer owns coercion, so a
//! malformed cell costs one row, not the whole file.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::data::provider::HistoryProvider;
use crate::error::Error;

/// Read every row of a headered CSV file into raw bar records.
pub fn read_bar_records(path: &Path) -> Result<Vec<Value>, Error> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| Error::CsvImport(e.to_string()))?;
    let headers = reader
        .headers()
        .map_err(|e| Error::CsvImport(e.to_string()))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| Error::CsvImport(e.to_string()))?;
        let mut record = Map::new();
        for (name, cell) in headers.iter().zip(row.iter()) {
            record.insert(name.to_string(), Value::String(cell.to_string()));
        }
        records.push(Value::Object(record));
    }
    Ok(records)
}

/// File-backed [`HistoryProvider`] — the offline stand-in for a market-data
/// API, and the implementation the CLI wires in.
pub struct CsvHistoryProvider {
    path: PathBuf,
}

impl CsvHistoryProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryProvider for CsvHistoryProvider {
    fn name(&self) -> &str {
        "csv"
    }

    fn daily_history(&self, _symbol: &str) -> Result<Vec<Value>, Error> {
        read_bar_records(&self.path)
    }
}
