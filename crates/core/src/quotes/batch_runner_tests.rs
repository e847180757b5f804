//! Batch runner tests with scripted providers.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use minefolio_market_data::{MarketDataError, Pacer, Quote, QuoteProvider};

use crate::config::{Holding, TrackerConfig};
use crate::constants::LAST_TRADING_DAY_SENTINEL;
use crate::quotes::batch_runner::BatchRunner;

/// Replays one scripted outcome per symbol and records the order in
/// which symbols were requested.
struct ScriptedProvider {
    outcomes: Mutex<HashMap<String, Result<Quote, MarketDataError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new() -> Self {
        Self {
            outcomes: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn quote(&self, symbol: &str, price: Decimal, stamp: &str) {
        self.outcomes.lock().unwrap().insert(
            symbol.to_string(),
            Ok(Quote {
                price,
                stamp: stamp.to_string(),
            }),
        );
    }

    fn failure(&self, symbol: &str, error: MarketDataError) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(symbol.to_string(), Err(error));
    }

    fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteProvider for ScriptedProvider {
    fn id(&self) -> &'static str {
        "scripted"
    }

    async fn latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.requests.lock().unwrap().push(symbol.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .remove(symbol)
            .expect("unscripted symbol")
    }
}

fn test_config(watchlist: Vec<Holding>) -> TrackerConfig {
    TrackerConfig {
        watchlist,
        pace_delay: Duration::ZERO,
        ..TrackerConfig::default()
    }
}

fn runner(provider: &ScriptedProvider) -> BatchRunner<'_> {
    BatchRunner::new(provider, Pacer::new(Duration::ZERO))
}

#[tokio::test]
async fn test_full_batch_success() {
    let provider = ScriptedProvider::new();
    provider.quote("AGI", dec!(19.25), "2025-03-14");
    provider.quote("FSM", dec!(4.80), "2025-03-14");
    provider.quote("VGZ", dec!(0.95), "2025-03-13");

    let config = test_config(vec![
        Holding::new("AGI", "AGI", dec!(2000), dec!(18.73)),
        Holding::new("FSM", "FSM", dec!(1500), dec!(4.61)),
        Holding::new("VGZ", "VGZ", dec!(750), dec!(0.93)),
    ]);

    let snapshot = runner(&provider).run(&config).await;

    assert_eq!(snapshot.source, "scripted");
    assert_eq!(snapshot.prices.len(), 3);
    assert!(snapshot.errors.is_empty());
    assert_eq!(snapshot.prices["AGI"], dec!(19.25));
    assert_eq!(snapshot.last_trading_day, "2025-03-14");
    assert_eq!(provider.requested(), ["AGI", "FSM", "VGZ"]);
}

#[tokio::test]
async fn test_failure_does_not_abort_batch() {
    let provider = ScriptedProvider::new();
    provider.quote("AGI", dec!(19.25), "2025-03-14");
    provider.failure("FSM", MarketDataError::EmptySeries);
    provider.quote("VGZ", dec!(0.95), "2025-03-13");

    let config = test_config(vec![
        Holding::new("AGI", "AGI", dec!(2000), dec!(18.73)),
        Holding::new("FSM", "FSM", dec!(1500), dec!(4.61)),
        Holding::new("VGZ", "VGZ", dec!(750), dec!(0.93)),
    ]);

    let snapshot = runner(&provider).run(&config).await;

    // All three symbols were attempted despite the middle failure.
    assert_eq!(provider.requested().len(), 3);
    assert_eq!(snapshot.prices.len(), 2);
    assert!(!snapshot.prices.contains_key("FSM"));
    assert_eq!(snapshot.errors.len(), 1);
    assert_eq!(snapshot.errors["FSM"], "INTRADAY empty/unsupported");
}

#[tokio::test]
async fn test_all_failures_still_produce_snapshot() {
    let provider = ScriptedProvider::new();
    provider.failure("AGI", MarketDataError::RateLimited);
    provider.failure("FSM", MarketDataError::EmptyQuote);

    let config = test_config(vec![
        Holding::new("AGI", "AGI", dec!(2000), dec!(18.73)),
        Holding::new("FSM", "FSM", dec!(1500), dec!(4.61)),
    ]);

    let snapshot = runner(&provider).run(&config).await;

    assert!(snapshot.prices.is_empty());
    assert_eq!(snapshot.errors["AGI"], "Rate limited (Note).");
    assert_eq!(snapshot.errors["FSM"], "GLOBAL_QUOTE empty");
    assert_eq!(snapshot.last_trading_day, LAST_TRADING_DAY_SENTINEL);
}

#[tokio::test]
async fn test_last_trading_day_is_lexicographic_max() {
    let provider = ScriptedProvider::new();
    provider.quote("AGI", dec!(19.25), "2025-03-13");
    provider.quote("FSM", dec!(4.80), "2025-03-14 19:55:00");
    provider.quote("VGZ", dec!(0.95), "2025-03-12");

    let config = test_config(vec![
        Holding::new("AGI", "AGI", dec!(2000), dec!(18.73)),
        Holding::new("FSM", "FSM", dec!(1500), dec!(4.61)),
        Holding::new("VGZ", "VGZ", dec!(750), dec!(0.93)),
    ]);

    let snapshot = runner(&provider).run(&config).await;

    assert_eq!(snapshot.last_trading_day, "2025-03-14 19:55:00");
}

#[tokio::test]
async fn test_empty_stamps_leave_sentinel() {
    let provider = ScriptedProvider::new();
    provider.quote("AGI", dec!(19.25), "");
    provider.quote("FSM", dec!(4.80), "");

    let config = test_config(vec![
        Holding::new("AGI", "AGI", dec!(2000), dec!(18.73)),
        Holding::new("FSM", "FSM", dec!(1500), dec!(4.61)),
    ]);

    let snapshot = runner(&provider).run(&config).await;

    assert_eq!(snapshot.prices.len(), 2);
    assert_eq!(snapshot.last_trading_day, LAST_TRADING_DAY_SENTINEL);
}

#[tokio::test]
async fn test_artifact_keys_use_internal_key_not_symbol() {
    let provider = ScriptedProvider::new();
    provider.quote("AGI.TO", dec!(26.10), "2025-03-14");
    provider.failure("FVI.TO", MarketDataError::EmptyQuote);

    let config = test_config(vec![
        Holding::new("AGI", "AGI.TO", dec!(2000), dec!(18.73)),
        Holding::new("FSM", "FVI.TO", dec!(1500), dec!(4.61)),
    ]);

    let snapshot = runner(&provider).run(&config).await;

    assert_eq!(provider.requested(), ["AGI.TO", "FVI.TO"]);
    assert!(snapshot.prices.contains_key("AGI"));
    assert!(snapshot.errors.contains_key("FSM"));
}
