//! Stooq daily-close provider.
//!
//! Stooq serves historical daily candles as CSV without an API key,
//! which makes it a good source for the site's lightweight price file.
//! US listings are addressed as `<ticker>.us`; anything else needs an
//! explicit override.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::QuoteProvider;

const BASE_URL: &str = "https://stooq.com/q/d/l/";
const PROVIDER_ID: &str = "stooq";
const USER_AGENT: &str = "mbd-bot";

/// Stooq daily-close provider.
pub struct StooqProvider {
    client: Client,
    /// Ticker to Stooq symbol overrides for non-US listings.
    overrides: HashMap<String, String>,
}

impl StooqProvider {
    pub fn new() -> Self {
        Self::with_overrides(HashMap::new())
    }

    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, overrides }
    }

    /// Map a ticker to its Stooq symbol, defaulting to the US listing.
    fn stooq_symbol(&self, ticker: &str) -> String {
        match self.overrides.get(ticker) {
            Some(symbol) => symbol.clone(),
            None => format!("{}.us", ticker.to_lowercase()),
        }
    }

    /// Pick the most recent valid close out of a daily candle CSV.
    ///
    /// Rows arrive oldest first as `Date,Open,High,Low,Close,Volume`.
    /// Short rows and rows without a positive close are skipped, so the
    /// newest usable row wins even when the tail of the file is bad.
    fn latest_close(csv_text: &str) -> Result<Quote, MarketDataError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv_text.as_bytes());

        let mut latest: Option<Quote> = None;
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(_) => continue,
            };
            let date = match record.get(0) {
                Some(date) => date,
                None => continue,
            };
            let close = match record.get(4) {
                Some(close) => close,
                None => continue,
            };
            let price = match Decimal::from_str(close.trim()) {
                Ok(price) => price,
                Err(_) => continue,
            };
            if price > Decimal::ZERO {
                latest = Some(Quote {
                    price,
                    stamp: date.to_string(),
                });
            }
        }

        latest.ok_or(MarketDataError::EmptySeries)
    }
}

impl Default for StooqProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for StooqProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_quote(&self, ticker: &str) -> Result<Quote, MarketDataError> {
        let symbol = self.stooq_symbol(ticker);
        let url = reqwest::Url::parse_with_params(BASE_URL, &[("s", symbol.as_str()), ("i", "d")])
            .map_err(|e| MarketDataError::ProviderError(format!("Failed to build URL: {}", e)))?;

        debug!("Stooq request: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderError(format!("HTTP {}", status)));
        }

        let text = response.text().await?;
        Self::latest_close(&text)
    }
}
