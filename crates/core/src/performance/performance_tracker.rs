use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;

use crate::config::TrackerConfig;
use crate::errors::Result;
use crate::performance::nav_calculator::{invested_market_value, return_pct, uninvested_cash};
use crate::performance::performance_model::{NavPoint, PerformanceState};
use crate::storage;

/// Decimal places kept for recorded NAV values.
const NAV_DP: u32 = 2;
/// Decimal places kept for recorded return percentages.
const RETURN_DP: u32 = 3;

/// Appends one NAV observation per calendar day to the performance
/// state file.
pub struct PerformanceTracker {
    path: PathBuf,
}

impl PerformanceTracker {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load prior state (or initialize it), append today's NAV point
    /// unless one is already recorded for `today`, and persist the
    /// state back unconditionally so older files pick up fields they
    /// were missing.
    pub fn record(
        &self,
        config: &TrackerConfig,
        prices: &BTreeMap<String, Decimal>,
        today: NaiveDate,
    ) -> Result<PerformanceState> {
        let mut state = match storage::load_json::<PerformanceState>(&self.path)? {
            Some(state) => state,
            None => PerformanceState::new(config.inception, config.currency.clone()),
        };

        let invested = invested_market_value(&config.watchlist, prices);
        let cash = uninvested_cash(&config.watchlist, config.total_capital);
        let nav = invested + cash;
        let pct = return_pct(nav, config.total_capital);

        if state.last_recorded_date() != Some(today) {
            let point = NavPoint {
                date: today,
                nav: nav.round_dp(NAV_DP),
                return_pct: pct.round_dp(RETURN_DP),
            };
            info!(
                "Recorded NAV {} ({}%) for {}",
                point.nav, point.return_pct, point.date
            );
            state.nav_history.push(point);
        } else {
            info!("NAV already recorded for {}, history unchanged", today);
        }

        storage::write_json(&self.path, &state)?;
        Ok(state)
    }
}
