//! Alpha Vantage quote provider.
//!
//! Two endpoints back the watchlist snapshot:
//! - GLOBAL_QUOTE for the latest end-of-day price and trading day
//! - TIME_SERIES_INTRADAY as a fallback when the daily quote is
//!   unavailable for a symbol
//!
//! Note: Alpha Vantage free tier is limited to a handful of calls per
//! minute, so callers pace their requests.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::QuoteProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "alphavantage";

/// Alpha Vantage quote provider.
///
/// Every response is checked for the provider's advisory fields before
/// any data is read; the free tier reports throttling through them
/// rather than through HTTP status codes.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    interval: String,
}

// ============================================================================
// Response structures for Alpha Vantage API
// ============================================================================

/// GLOBAL_QUOTE response.
#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "07. latest trading day")]
    latest_trading_day: Option<String>,
}

/// TIME_SERIES_INTRADAY response.
///
/// The bar series lives under an interval-dependent key such as
/// `Time Series (5min)`, so it is captured through flatten and looked
/// up by the configured interval.
#[derive(Debug, Deserialize)]
struct IntradayResponse {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct IntradayBar {
    #[serde(rename = "4. close")]
    close: String,
}

// ============================================================================
// AlphaVantageProvider implementation
// ============================================================================

impl AlphaVantageProvider {
    /// Create a new Alpha Vantage provider with the given API key and
    /// intraday bar interval.
    pub fn new(api_key: String, interval: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            interval,
        }
    }

    /// Make a request to the Alpha Vantage API and decode the body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = reqwest::Url::parse_with_params(BASE_URL, &all_params)
            .map_err(|e| MarketDataError::ProviderError(format!("Failed to build URL: {}", e)))?;

        debug!(
            "Alpha Vantage request: {}",
            url.as_str().replace(&self.api_key, "***")
        );

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited);
        }
        if !status.is_success() {
            return Err(MarketDataError::ProviderError(format!("HTTP {}", status)));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Check the advisory fields every endpoint can carry. A `Note` is
    /// the throttling signal and outranks the other two.
    fn check_advisories(
        note: &Option<String>,
        information: &Option<String>,
        error_message: &Option<String>,
    ) -> Result<(), MarketDataError> {
        if note.is_some() {
            return Err(MarketDataError::RateLimited);
        }
        if let Some(msg) = information {
            return Err(MarketDataError::ProviderInformation(msg.clone()));
        }
        if let Some(msg) = error_message {
            return Err(MarketDataError::ProviderError(msg.clone()));
        }
        Ok(())
    }

    /// Parse a positive price out of an endpoint's string field.
    fn parse_price(raw: &str, message: &str) -> Result<Decimal, MarketDataError> {
        match Decimal::from_str(raw) {
            Ok(price) if price > Decimal::ZERO => Ok(price),
            _ => Err(MarketDataError::InvalidPrice(message.to_string())),
        }
    }

    fn quote_from_global(response: GlobalQuoteResponse) -> Result<Quote, MarketDataError> {
        Self::check_advisories(&response.note, &response.information, &response.error_message)?;

        let body = response.global_quote.unwrap_or_default();
        let raw = body.price.unwrap_or_default();
        if raw.is_empty() {
            return Err(MarketDataError::EmptyQuote);
        }
        let price = Self::parse_price(&raw, "GLOBAL_QUOTE bad price")?;
        let stamp = body.latest_trading_day.unwrap_or_default();

        Ok(Quote { price, stamp })
    }

    fn quote_from_intraday(
        response: IntradayResponse,
        interval: &str,
    ) -> Result<Quote, MarketDataError> {
        Self::check_advisories(&response.note, &response.information, &response.error_message)?;

        let key = format!("Time Series ({})", interval);
        let series = match response.rest.get(&key).and_then(|v| v.as_object()) {
            Some(series) => series,
            None => return Err(MarketDataError::EmptySeries),
        };

        // Bar timestamps are ISO strings, so the string maximum is the
        // most recent bar.
        let (stamp, bar_value) = match series.iter().max_by(|a, b| a.0.cmp(b.0)) {
            Some((stamp, value)) => (stamp.clone(), value.clone()),
            None => return Err(MarketDataError::EmptySeries),
        };

        let bar: IntradayBar = serde_json::from_value(bar_value)?;
        let price = Self::parse_price(&bar.close, "INTRADAY bad close")?;

        Ok(Quote { price, stamp })
    }

    /// Fetch the latest end-of-day quote for a symbol.
    async fn global_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let params = [("function", "GLOBAL_QUOTE"), ("symbol", symbol)];

        let response: GlobalQuoteResponse = self.fetch(&params).await?;
        Self::quote_from_global(response)
    }

    /// Fetch the close of the most recent intraday bar for a symbol.
    async fn intraday_close(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let params = [
            ("function", "TIME_SERIES_INTRADAY"),
            ("symbol", symbol),
            ("interval", self.interval.as_str()),
            ("outputsize", "compact"),
        ];

        let response: IntradayResponse = self.fetch(&params).await?;
        Self::quote_from_intraday(response, &self.interval)
    }
}

/// Run the end-of-day attempt and, on any failure, the intraday
/// fallback. The intraday future is not polled when the first attempt
/// succeeds; when both fail, the intraday error is the one returned
/// and the first failure survives only in the debug log.
async fn best_effort<E, I>(
    symbol: &str,
    end_of_day: E,
    intraday: I,
) -> Result<Quote, MarketDataError>
where
    E: Future<Output = Result<Quote, MarketDataError>>,
    I: Future<Output = Result<Quote, MarketDataError>>,
{
    match end_of_day.await {
        Ok(quote) => Ok(quote),
        Err(e) => {
            debug!("GLOBAL_QUOTE failed for {}: {}; trying intraday", symbol, e);
            intraday.await
        }
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    /// Try the end-of-day quote first, then fall back to the latest
    /// intraday close.
    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        best_effort(
            symbol,
            self.global_quote(symbol),
            self.intraday_close(symbol),
        )
        .await
    }
}
