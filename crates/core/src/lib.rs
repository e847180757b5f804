//! Minefolio Core - run configuration, snapshot batch, NAV bookkeeping.
//!
//! This crate contains the business logic of the scheduled data jobs.
//! It is transport-agnostic: quote fetching sits behind the provider
//! trait from the `minefolio-market-data` crate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod performance;
pub mod quotes;
pub mod storage;

// Re-export common types from the config, quotes, and performance modules
pub use config::{Holding, TrackerConfig};
pub use performance::*;
pub use quotes::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
