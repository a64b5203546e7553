//! Raw-record cleaning shared by both engines.
//!
//! Upstream providers hand over loosely-typed JSON rows. Cleaning keeps rows
//! whose required cells parse, drops the rest, and stable-sorts by date —
//! duplicate dates are not collapsed, they keep their input order.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::warn;

use crate::domain::{ClosePoint, PriceBar};
use crate::error::Error;

/// Columns the backtest requires; each must appear in at least one record.
const OHLC_COLUMNS: [&str; 5] = ["date", "open", "high", "low", "close"];

/// Parse a `date` cell. Accepts `YYYY-MM-DD`, RFC 3339 datetimes, and
/// datetimes without an offset; the time component is discarded.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Coerce a price cell. Accepts JSON numbers and numeric strings; anything
/// non-finite is rejected.
pub fn parse_price(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}

/// Extract and clean the `{date, close}` series for the indicator engine.
///
/// Records missing either key are skipped silently; rows whose cells fail
/// conversion are dropped. Distinct errors separate "nothing had the
/// required keys" from "everything failed conversion".
pub fn close_series(raw: &[Value]) -> Result<Vec<ClosePoint>, Error> {
    if raw.is_empty() {
        warn!("indicator calculation requested with no historical data");
        return Err(Error::InvalidInput);
    }

    let relevant: Vec<_> = raw
        .iter()
        .filter_map(Value::as_object)
        .filter(|obj| obj.contains_key("date") && obj.contains_key("close"))
        .collect();
    if relevant.is_empty() {
        warn!("no historical rows carried both 'date' and 'close'");
        return Err(Error::NoUsableRows);
    }

    let mut series: Vec<ClosePoint> = relevant
        .iter()
        .filter_map(|obj| {
            let date = parse_date(obj.get("date")?)?;
            let close = parse_price(obj.get("close")?)?;
            Some(ClosePoint { date, close })
        })
        .collect();
    if series.is_empty() {
        warn!("every historical row failed date or close conversion");
        return Err(Error::NothingAfterCleaning);
    }

    // Stable: same-date rows keep input order, so the last-sorted one drives
    // the latest-row snapshot.
    series.sort_by_key(|point| point.date);
    Ok(series)
}

/// Clean full OHLC rows for the backtest engine.
///
/// Every required column must appear in at least one record; after that,
/// rows with an unparsable cell are dropped like the indicator path does.
pub fn ohlc_series(raw: &[Value]) -> Result<Vec<PriceBar>, Error> {
    if raw.is_empty() {
        return Err(Error::EmptyHistory);
    }

    for column in OHLC_COLUMNS {
        let present = raw
            .iter()
            .any(|item| item.as_object().is_some_and(|obj| obj.contains_key(column)));
        if !present {
            warn!(column, "historical data is missing a required OHLC column");
            return Err(Error::MissingOhlcColumns);
        }
    }

    let mut bars: Vec<PriceBar> = raw
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            Some(PriceBar {
                date: parse_date(obj.get("date")?)?,
                open: parse_price(obj.get("open")?)?,
                high: parse_price(obj.get("high")?)?,
                low: parse_price(obj.get("low")?)?,
                close: parse_price(obj.get("close")?)?,
            })
        })
        .collect();
    if bars.is_empty() {
        return Err(Error::EmptyHistory);
    }

    bars.sort_by_key(|bar| bar.date);
    Ok(bars)
}
