use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::TradeCandidate;

/// Day index reported when no trade exists.
pub const NO_DAY: i64 = -1;

/// Outcome of one search call.
///
/// Numeric fields are rounded to whole currency units. On no-trade the day
/// indices are [`NO_DAY`], prices and profit are 0, times are absent, and the
/// calculation date is still preserved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTradingResult {
    pub max_profit: i64,
    pub buy_day: i64,
    pub sell_day: i64,
    pub buy_price: i64,
    pub sell_price: i64,
    pub buy_time: Option<DateTime<Utc>>,
    pub sell_time: Option<DateTime<Utc>>,
    pub calculation_date: NaiveDate,
}

impl BestTradingResult {
    pub fn no_trade(calculation_date: NaiveDate) -> Self {
        Self {
            max_profit: 0,
            buy_day: NO_DAY,
            sell_day: NO_DAY,
            buy_price: 0,
            sell_price: 0,
            buy_time: None,
            sell_time: None,
            calculation_date,
        }
    }

    /// Rounds the winning candidate; comparison already happened unrounded.
    pub(crate) fn from_candidate(best: &TradeCandidate, calculation_date: NaiveDate) -> Self {
        Self {
            max_profit: round_half_up(best.profit),
            buy_day: best.buy_day as i64,
            sell_day: best.sell_day as i64,
            buy_price: round_half_up(best.buy_price),
            sell_price: round_half_up(best.sell_price),
            buy_time: Some(best.buy_at),
            sell_time: Some(best.sell_at),
            calculation_date,
        }
    }

    /// `true` when the search selected a buy/sell pair.
    pub fn has_trade(&self) -> bool {
        self.buy_day >= 0 && self.sell_day >= 0
    }
}

/// Round to the nearest integer, halves toward positive infinity.
///
/// `2.5 → 3`, `-2.5 → -2`. Unlike `f64::round`, which rounds halves away
/// from zero.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
