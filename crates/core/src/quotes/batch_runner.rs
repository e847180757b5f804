use std::collections::BTreeMap;

use chrono::Utc;
use log::{info, warn};
use minefolio_market_data::{Pacer, QuoteProvider};

use crate::config::TrackerConfig;
use crate::constants::LAST_TRADING_DAY_SENTINEL;
use crate::quotes::snapshot_model::QuoteSnapshot;

/// Runs one watchlist pass against a quote provider.
///
/// A failure never crosses a symbol boundary: each failed fetch becomes
/// a message in the snapshot error map and the loop moves on, so the
/// run always yields a snapshot even when every symbol failed.
pub struct BatchRunner<'a> {
    provider: &'a dyn QuoteProvider,
    pacer: Pacer,
}

impl<'a> BatchRunner<'a> {
    pub fn new(provider: &'a dyn QuoteProvider, pacer: Pacer) -> Self {
        Self { provider, pacer }
    }

    /// Fetch every watchlist symbol in declaration order and assemble
    /// the run's snapshot.
    pub async fn run(mut self, config: &TrackerConfig) -> QuoteSnapshot {
        let asof_iso = Utc::now();
        let mut prices = BTreeMap::new();
        let mut errors = BTreeMap::new();
        let mut last_stamp = String::new();

        for holding in &config.watchlist {
            self.pacer.pace().await;

            match self.provider.latest_quote(&holding.symbol).await {
                Ok(quote) => {
                    info!("{}: {} ({})", holding.key, quote.price, quote.stamp);
                    prices.insert(holding.key.clone(), quote.price);
                    if !quote.stamp.is_empty() && quote.stamp > last_stamp {
                        last_stamp = quote.stamp;
                    }
                }
                Err(e) => {
                    warn!("{}: {}", holding.key, e);
                    errors.insert(holding.key.clone(), e.to_string());
                }
            }
        }

        let last_trading_day = if last_stamp.is_empty() {
            LAST_TRADING_DAY_SENTINEL.to_string()
        } else {
            last_stamp
        };

        QuoteSnapshot {
            asof_iso,
            last_trading_day,
            source: self.provider.id().to_string(),
            prices,
            errors,
        }
    }
}
