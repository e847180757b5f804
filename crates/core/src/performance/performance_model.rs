use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::constants;

/// One appended NAV observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    /// Calendar day (UTC) the observation belongs to.
    pub date: NaiveDate,
    /// NAV in dollars, rounded to cents.
    pub nav: Decimal,
    /// Return on total capital in percent, rounded to 3 decimals.
    pub return_pct: Decimal,
}

/// Persisted NAV history, read and rewritten by every snapshot run.
///
/// Fields missing from an older file deserialize to their defaults, so
/// the file is upgraded in place the next time it is saved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceState {
    #[serde(default = "config::inception_date")]
    pub inception: NaiveDate,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub nav_history: Vec<NavPoint>,
}

impl PerformanceState {
    pub fn new(inception: NaiveDate, currency: String) -> Self {
        Self {
            inception,
            currency,
            nav_history: Vec::new(),
        }
    }

    /// Date of the most recent history entry, if any.
    pub fn last_recorded_date(&self) -> Option<NaiveDate> {
        self.nav_history.last().map(|point| point.date)
    }
}

impl Default for PerformanceState {
    fn default() -> Self {
        Self::new(config::inception_date(), default_currency())
    }
}

fn default_currency() -> String {
    constants::CURRENCY.to_string()
}
