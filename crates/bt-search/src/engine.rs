use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::series::{resolve_series, ResolvedDay};
use crate::types::BestTradingResult;
use crate::validate::{validate_prices, validate_shape, TradeInputError};

/// A buy/sell pair with its unrounded profit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TradeCandidate {
    pub profit: f64,
    pub buy_day: usize,
    pub sell_day: usize,
    pub buy_price: f64,
    pub sell_price: f64,
    pub buy_at: DateTime<Utc>,
    pub sell_at: DateTime<Utc>,
}

impl TradeCandidate {
    fn between(buy: &ResolvedDay, sell: &ResolvedDay) -> Self {
        Self {
            profit: sell.high_price - buy.low_price,
            buy_day: buy.index,
            sell_day: sell.index,
            buy_price: buy.low_price,
            sell_price: sell.high_price,
            buy_at: buy.low_at,
            sell_at: sell.high_at,
        }
    }
}

/// Best candidate seen so far. Local to one search call.
#[derive(Debug, Default)]
struct BestTradeState {
    best: Option<TradeCandidate>,
}

impl BestTradeState {
    /// Zero until a candidate is adopted, so only strictly positive profits
    /// can ever be adopted.
    fn best_profit(&self) -> f64 {
        self.best.map_or(0.0, |c| c.profit)
    }

    /// Adopt `candidate` only on strict improvement; earlier offers win ties.
    fn offer(&mut self, candidate: TradeCandidate) {
        if candidate.profit > self.best_profit() {
            self.best = Some(candidate);
        }
    }
}

/// Cross-day pass: running minimum low against every later high.
///
/// The running minimum moves only on a strictly lower low, so it always
/// points at the earliest occurrence of the minimum.
fn scan_cross_day(days: &[ResolvedDay], state: &mut BestTradeState) {
    let Some((first, rest)) = days.split_first() else {
        return;
    };

    let mut cheapest = first;
    for sell in rest {
        state.offer(TradeCandidate::between(cheapest, sell));
        if sell.low_price < cheapest.low_price {
            cheapest = sell;
        }
    }
}

/// Same-day pass: low-then-high within one day.
fn scan_same_day(days: &[ResolvedDay], state: &mut BestTradeState) {
    for day in days.iter().filter(|d| d.allows_same_day_trade()) {
        state.offer(TradeCandidate::between(day, day));
    }
}

/// Find the most profitable single trade, or `None` when no strictly
/// positive profit exists.
///
/// O(n) time. Cross-day candidates are evaluated before same-day ones, and
/// within each pass earlier sell days come first.
pub fn search(days: &[ResolvedDay]) -> Option<TradeCandidate> {
    let mut state = BestTradeState::default();
    scan_cross_day(days, &mut state);
    scan_same_day(days, &mut state);
    state.best
}

/// Validate, resolve, and search in one call.
///
/// Returns `Err` only for rejected input. An empty series short-circuits to
/// the no-trade result without touching the calendar.
pub fn compute<S: AsRef<str>>(
    low_prices: &[f64],
    low_times: &[S],
    high_prices: &[f64],
    high_times: &[S],
    calculation_date: NaiveDate,
) -> Result<BestTradingResult, TradeInputError> {
    let n = validate_shape(low_prices, low_times, high_prices, high_times)?;
    if n == 0 {
        debug!(%calculation_date, "empty series; no trade");
        return Ok(BestTradingResult::no_trade(calculation_date));
    }

    validate_prices(low_prices, high_prices)?;
    let days = resolve_series(low_prices, low_times, high_prices, high_times, calculation_date)?;

    let result = match search(&days) {
        Some(best) => BestTradingResult::from_candidate(&best, calculation_date),
        None => BestTradingResult::no_trade(calculation_date),
    };

    debug!(
        days = n,
        %calculation_date,
        max_profit = result.max_profit,
        buy_day = result.buy_day,
        sell_day = result.sell_day,
        "trade search complete"
    );
    Ok(result)
}
