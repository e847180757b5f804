//! Minefolio Market Data Crate
//!
//! This crate fetches latest prices for the minefolio batch jobs.
//!
//! # Overview
//!
//! Two providers are implemented:
//! - Alpha Vantage: end-of-day quotes with an intraday-close fallback,
//!   used for the daily watchlist snapshot
//! - Stooq: daily candle CSVs, used for the site's price file
//!
//! Both sit behind the [`QuoteProvider`] trait so callers can be fed
//! scripted quotes in tests. Call pacing lives here too, since it is a
//! property of the providers' free tiers rather than of any caller.
//!
//! # Core Types
//!
//! - [`Quote`] - A price plus the provider's timestamp marker
//! - [`QuoteProvider`] - Latest-price fetching, one symbol at a time
//! - [`Pacer`] - Fixed delay between consecutive provider calls
//! - [`MarketDataError`] - Per-symbol failure taxonomy

pub mod errors;
pub mod models;
pub mod pacing;
pub mod provider;

// Re-export all public types from models
pub use models::Quote;

// Re-export provider types
pub use provider::alpha_vantage::AlphaVantageProvider;
pub use provider::stooq::StooqProvider;
pub use provider::QuoteProvider;

pub use errors::MarketDataError;
pub use pacing::Pacer;
