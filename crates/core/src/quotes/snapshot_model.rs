use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One run's quote snapshot, written whole to `data/quotes.json`.
///
/// The file is overwritten on every run and keeps no history; its field
/// names are part of the published format the site reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    /// When this run fetched its data.
    pub asof_iso: DateTime<Utc>,
    /// Latest trading-day marker seen across all symbols this run, or
    /// a sentinel when none was obtained.
    pub last_trading_day: String,
    /// Provider tag the prices came from.
    pub source: String,
    /// Fetched price per internal ticker key.
    pub prices: BTreeMap<String, Decimal>,
    /// Failure message per internal ticker key that yielded no price.
    pub errors: BTreeMap<String, String>,
}

/// The Stooq price artifact, written whole to `data/prices.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceFile {
    #[serde(rename = "asOf")]
    pub as_of: DateTime<Utc>,
    pub source: String,
    pub quotes: BTreeMap<String, PriceEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub price: Decimal,
}
