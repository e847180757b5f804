//! Compiled-in run configuration.
//!
//! The batch jobs take no arguments and read no config files: the
//! watchlist, capital split, and provider parameters are fixed at build
//! time and assembled here. Everything downstream receives an explicit
//! [`TrackerConfig`] so tests can substitute their own.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants;

/// One watchlist row: the symbol mapping plus the fixed position
/// behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct Holding {
    /// Internal ticker key used in every artifact map.
    pub key: String,
    /// Symbol sent to the quote provider.
    pub symbol: String,
    /// Dollars allocated to the position at inception.
    pub target_dollars: Decimal,
    /// Price the share count was fixed at. Never changes.
    pub entry_price: Decimal,
}

impl Holding {
    pub fn new(key: &str, symbol: &str, target_dollars: Decimal, entry_price: Decimal) -> Self {
        Self {
            key: key.to_string(),
            symbol: symbol.to_string(),
            target_dollars,
            entry_price,
        }
    }

    /// Share count fixed at inception; positions are never rebalanced.
    pub fn shares(&self) -> Decimal {
        self.target_dollars / self.entry_price
    }
}

/// Immutable configuration for one batch run.
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    /// Alpha Vantage API key.
    pub api_key: String,
    /// Watchlist in fetch order.
    pub watchlist: Vec<Holding>,
    /// Tickers mirrored into the Stooq price file.
    pub price_tickers: Vec<String>,
    /// Dollars the portfolio started with.
    pub total_capital: Decimal,
    /// First day of the position history.
    pub inception: NaiveDate,
    /// Reporting currency.
    pub currency: String,
    /// Bar interval for the intraday fallback.
    pub intraday_interval: String,
    /// Wait between provider calls.
    pub pace_delay: Duration,
    /// Directory the artifacts are written to.
    pub data_dir: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_key: constants::ALPHA_VANTAGE_API_KEY.to_string(),
            watchlist: default_watchlist(),
            price_tickers: constants::PRICE_TICKERS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            total_capital: constants::TOTAL_CAPITAL,
            inception: inception_date(),
            currency: constants::CURRENCY.to_string(),
            intraday_interval: constants::INTRADAY_INTERVAL.to_string(),
            pace_delay: constants::PACE_DELAY,
            data_dir: PathBuf::from(constants::DATA_DIR),
        }
    }
}

impl TrackerConfig {
    pub fn quotes_path(&self) -> PathBuf {
        self.data_dir.join(constants::QUOTES_FILE)
    }

    pub fn performance_path(&self) -> PathBuf {
        self.data_dir.join(constants::PERFORMANCE_FILE)
    }

    pub fn prices_path(&self) -> PathBuf {
        self.data_dir.join(constants::PRICES_FILE)
    }
}

/// Inception date parsed from its configured literal.
pub fn inception_date() -> NaiveDate {
    NaiveDate::parse_from_str(constants::INCEPTION_DATE, "%Y-%m-%d")
        .unwrap_or_else(|_| Utc::now().date_naive())
}

/// Watchlist with identity symbol mappings.
///
/// If a ticker is Canadian/TSX and keeps failing, it may need an
/// explicit mapping (for example `.TO`) in the symbol column.
fn default_watchlist() -> Vec<Holding> {
    vec![
        Holding::new("AGI", "AGI", dec!(2000), dec!(18.73)),
        Holding::new("FSM", "FSM", dec!(1500), dec!(4.61)),
        Holding::new("GAU", "GAU", dec!(1000), dec!(1.38)),
        Holding::new("NFGC", "NFGC", dec!(1000), dec!(2.26)),
        Holding::new("VGZ", "VGZ", dec!(750), dec!(0.93)),
        Holding::new("NEWP", "NEWP", dec!(750), dec!(2.04)),
    ]
}
