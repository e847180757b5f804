use thiserror::Error;

/// Errors produced while fetching a quote.
///
/// Per-symbol failures never abort a batch: the runner downgrades each
/// of these to its display string and records it in the snapshot error
/// map, keyed by symbol. The display strings are therefore part of the
/// published artifact format and stay stable.
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// Transport-level failure: connect, TLS, timeout, body read.
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected JSON shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider sent a `Note` field, its throttling signal.
    #[error("Rate limited (Note).")]
    RateLimited,

    /// The provider sent an `Information` field, typically a plan or
    /// symbol restriction.
    #[error("Information: {0}")]
    ProviderInformation(String),

    /// The provider sent an explicit `Error Message` field.
    #[error("API error: {0}")]
    ProviderError(String),

    /// GLOBAL_QUOTE answered without a price field.
    #[error("GLOBAL_QUOTE empty")]
    EmptyQuote,

    /// The requested price series was missing or had no usable rows.
    #[error("INTRADAY empty/unsupported")]
    EmptySeries,

    /// A price field was present but failed validation; carries the
    /// endpoint-specific message verbatim.
    #[error("{0}")]
    InvalidPrice(String),
}
