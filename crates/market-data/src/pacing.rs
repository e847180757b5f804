//! Fixed-delay pacing between provider calls.
//!
//! Free-tier quote APIs throttle aggressively, so the batch runner
//! spaces its calls with a flat delay instead of a token bucket: the
//! watchlist is small and every run makes the same handful of calls.

use std::time::Duration;

use log::debug;

/// Spaces a sequence of calls by a fixed delay.
///
/// The first call through [`Pacer::pace`] returns immediately; every
/// later call sleeps for the full delay. Nothing sleeps after the last
/// call because the pacer is awaited before each call, not after.
pub struct Pacer {
    delay: Duration,
    started: bool,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: false,
        }
    }

    /// Wait until the next call may proceed.
    pub async fn pace(&mut self) {
        if !self.started {
            self.started = true;
            return;
        }
        if self.delay > Duration::ZERO {
            debug!("Pacing: sleeping {:?} before next call", self.delay);
            tokio::time::sleep(self.delay).await;
        }
    }
}
