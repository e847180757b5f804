use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Alpha Vantage API key (free tier)
pub const ALPHA_VANTAGE_API_KEY: &str = "GUY8S89NSG15NVYH";

/// Bar interval for the intraday fallback
pub const INTRADAY_INTERVAL: &str = "5min";

/// Wait between provider calls; the free tier is strict
pub const PACE_DELAY: Duration = Duration::from_secs(15);

/// Dollars the portfolio started with
pub const TOTAL_CAPITAL: Decimal = dec!(100000);

/// First day of the position history
pub const INCEPTION_DATE: &str = "2025-01-02";

/// Reporting currency
pub const CURRENCY: &str = "USD";

/// Directory the site reads its data files from
pub const DATA_DIR: &str = "data";

/// Snapshot artifact, overwritten every run
pub const QUOTES_FILE: &str = "quotes.json";

/// NAV history state file, read and rewritten every run
pub const PERFORMANCE_FILE: &str = "performance.json";

/// Stooq price artifact, overwritten every update
pub const PRICES_FILE: &str = "prices.json";

/// Marker recorded when no trading day was obtained this run
pub const LAST_TRADING_DAY_SENTINEL: &str = "—";

/// Tickers mirrored into the Stooq price file
pub const PRICE_TICKERS: &[&str] = &["AGI", "FSM", "GAU", "NFGC", "VGZ", "NEWP", "GOOGL"];
