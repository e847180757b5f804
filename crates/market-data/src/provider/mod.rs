//! Quote provider implementations.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

pub mod alpha_vantage;
pub mod stooq;

/// A source of latest prices for listed symbols.
///
/// Implementations own their transport and error classification; the
/// caller only sees a [`Quote`] or a [`MarketDataError`] per symbol.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Short tag recorded as the `source` of any artifact built from
    /// this provider's quotes.
    fn id(&self) -> &'static str;

    /// Fetches the most recent available price for `symbol`.
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}
