//! History provider seam.
//!
//! The orchestration layer takes its data source as an explicit capability,
//! so the engine never names a concrete market-data client and tests can
//! substitute a stub.

use serde_json::Value;

use crate::error::Error;

/// A source of raw daily bar records for a symbol.
///
/// Implementations return their full daily history — the product pulled
/// roughly ten years of dailies, enough for any warm-up window. Windowing
/// and coercion happen downstream in the cleaning layer, which is why the
/// records stay loosely typed here.
pub trait HistoryProvider {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Full daily history for `symbol`, oldest first or not — order is
    /// irrelevant, the cleaning layer sorts.
    fn daily_history(&self, symbol: &str) -> Result<Vec<Value>, Error>;
}
