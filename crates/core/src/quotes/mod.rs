//! Quote snapshot production - watchlist fetching and artifact models.

mod batch_runner;
mod snapshot_model;

pub use batch_runner::*;
pub use snapshot_model::*;

#[cfg(test)]
mod batch_runner_tests;
