use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single fetched price with the provider's timestamp marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Last traded price. Providers guarantee this is positive.
    pub price: Decimal,
    /// Trading day (`YYYY-MM-DD`) for end-of-day quotes, or a bar
    /// timestamp (`YYYY-MM-DD HH:MM:SS`) for intraday closes. Both
    /// forms sort chronologically as plain strings, so callers keep a
    /// running maximum without parsing. May be empty when the provider
    /// omitted it.
    pub stamp: String,
}
