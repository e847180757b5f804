//! NAV arithmetic over one run's fetched prices.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use crate::config::Holding;

/// Market value of the invested sleeve.
///
/// Only symbols present in `prices` contribute: a symbol that failed to
/// fetch this run is valued at zero for the day rather than carried
/// forward from an earlier close.
pub fn invested_market_value(
    watchlist: &[Holding],
    prices: &BTreeMap<String, Decimal>,
) -> Decimal {
    let mut total = Decimal::ZERO;
    for holding in watchlist {
        match prices.get(&holding.key) {
            Some(price) => total += holding.shares() * price,
            None => debug!("{}: no price this run, valued at zero", holding.key),
        }
    }
    total
}

/// Capital never deployed into positions. Floored at zero in case the
/// targets ever exceed the starting capital.
pub fn uninvested_cash(watchlist: &[Holding], total_capital: Decimal) -> Decimal {
    let targets: Decimal = watchlist.iter().map(|h| h.target_dollars).sum();
    (total_capital - targets).max(Decimal::ZERO)
}

/// Return on total capital, in percent.
pub fn return_pct(nav: Decimal, total_capital: Decimal) -> Decimal {
    if total_capital.is_zero() {
        return Decimal::ZERO;
    }
    (nav / total_capital - Decimal::ONE) * Decimal::ONE_HUNDRED
}
