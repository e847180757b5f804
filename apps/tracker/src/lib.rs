//! Entry points shared by the minefolio batch binaries.
//!
//! Each binary is a single scheduled pass: assemble the compiled-in
//! configuration, run one job, exit. Scheduling itself lives outside
//! the process.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use minefolio_core::{
    storage, BatchRunner, PerformanceTracker, PriceEntry, PriceFile, TrackerConfig,
};
use minefolio_market_data::{AlphaVantageProvider, Pacer, QuoteProvider, StooqProvider};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// One scheduled pass: fetch the watchlist snapshot, write it, then
/// fold its prices into the NAV history.
pub async fn run_snapshot(config: &TrackerConfig) -> anyhow::Result<()> {
    let provider =
        AlphaVantageProvider::new(config.api_key.clone(), config.intraday_interval.clone());
    let runner = BatchRunner::new(&provider, Pacer::new(config.pace_delay));
    let snapshot = runner.run(config).await;

    storage::write_json(&config.quotes_path(), &snapshot)?;
    tracing::info!(
        "Wrote {}: {} prices, {} errors, last trading day {}",
        config.quotes_path().display(),
        snapshot.prices.len(),
        snapshot.errors.len(),
        snapshot.last_trading_day
    );

    let tracker = PerformanceTracker::new(config.performance_path());
    let state = tracker.record(config, &snapshot.prices, Utc::now().date_naive())?;
    tracing::info!(
        "Performance history now has {} entries",
        state.nav_history.len()
    );

    Ok(())
}

/// Refresh the Stooq price file the site reads.
pub async fn run_price_update(config: &TrackerConfig) -> anyhow::Result<()> {
    let provider = StooqProvider::new();
    let mut quotes = BTreeMap::new();

    for ticker in &config.price_tickers {
        match provider.latest_quote(ticker).await {
            Ok(quote) => {
                quotes.insert(ticker.clone(), PriceEntry { price: quote.price });
            }
            // Missing symbols stay absent; the site falls back gracefully.
            Err(e) => tracing::debug!("{}: skipped ({})", ticker, e),
        }
    }

    let file = PriceFile {
        as_of: Utc::now(),
        source: provider.id().to_string(),
        quotes,
    };
    storage::write_json(&config.prices_path(), &file)?;
    tracing::info!(
        "Updated {}: {} of {} symbols ({})",
        config.prices_path().display(),
        file.quotes.len(),
        config.price_tickers.len(),
        updated_tickers(&file.quotes)
    );

    Ok(())
}

/// Comma-separated list of the tickers that made it into the price
/// file, for the completion log line.
fn updated_tickers(quotes: &BTreeMap<String, PriceEntry>) -> String {
    quotes
        .keys()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
