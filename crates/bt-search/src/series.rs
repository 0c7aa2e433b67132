//! Resolved trading-day series.
//!
//! Binds every input index to a concrete trading date and to its low/high
//! instants. Built once per search call and dropped when the call returns.

use bt_calendar::{build_trading_dates, find_last_trading_date_before, parse_time, to_instant};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::validate::{validate_shape, TradeInputError};

/// One input day after calendar resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDay {
    /// Position in the input series (0 = oldest).
    pub index: usize,
    pub date: NaiveDate,
    pub low_price: f64,
    pub low_time: NaiveTime,
    pub low_at: DateTime<Utc>,
    pub high_price: f64,
    pub high_time: NaiveTime,
    pub high_at: DateTime<Utc>,
}

impl ResolvedDay {
    /// Buying at the low and selling at the high on this same day is only
    /// possible when the low strictly precedes the high.
    pub fn allows_same_day_trade(&self) -> bool {
        self.low_time < self.high_time
    }
}

/// Resolve raw parallel sequences into dated, timed days.
///
/// Times are parsed in index order, the low before the high of each day; the
/// first malformed value aborts resolution.
pub fn resolve_series<S: AsRef<str>>(
    low_prices: &[f64],
    low_times: &[S],
    high_prices: &[f64],
    high_times: &[S],
    calculation_date: NaiveDate,
) -> Result<Vec<ResolvedDay>, TradeInputError> {
    let n = validate_shape(low_prices, low_times, high_prices, high_times)?;
    if n == 0 {
        return Ok(Vec::new());
    }

    let last_trading_date = find_last_trading_date_before(calculation_date);
    let dates = build_trading_dates(last_trading_date, n);

    let mut days = Vec::with_capacity(n);
    for (index, date) in dates.into_iter().enumerate() {
        let low_time = parse_field(low_times[index].as_ref(), "lowTimes", index)?;
        let high_time = parse_field(high_times[index].as_ref(), "highTimes", index)?;

        days.push(ResolvedDay {
            index,
            date,
            low_price: low_prices[index],
            low_time,
            low_at: to_instant(date, low_time),
            high_price: high_prices[index],
            high_time,
            high_at: to_instant(date, high_time),
        });
    }
    Ok(days)
}

fn parse_field(raw: &str, field: &'static str, index: usize) -> Result<NaiveTime, TradeInputError> {
    parse_time(raw).map_err(|source| TradeInputError::InvalidTimeFormat {
        field,
        index,
        source,
    })
}
