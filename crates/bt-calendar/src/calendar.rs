//! Trading-day calendar.
//!
//! Deterministic, pure logic. No IO, no wall-clock, no randomness.
//!
//! # Design
//!
//! A trading day is any Monday–Friday calendar date. Every walk in this
//! module moves backward one calendar day at a time and skips Saturday and
//! Sunday, so a walk never needs more than three steps to land on a weekday.
//!
//! Index conventions follow the input series: index `n - 1` is the most
//! recent trading day, index `0` the oldest.

use chrono::{Datelike, NaiveDate, Weekday};

// ---------------------------------------------------------------------------
// Weekday rules
// ---------------------------------------------------------------------------

/// Returns `true` for Monday through Friday.
pub fn is_trading_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The closest trading day strictly before `date`.
///
/// Saturates at chrono's lower date bound instead of panicking.
pub fn previous_trading_day(date: NaiveDate) -> NaiveDate {
    let mut candidate = date;
    while let Some(prev) = candidate.pred_opt() {
        candidate = prev;
        if is_trading_day(candidate) {
            return candidate;
        }
    }
    candidate
}

/// Finds the last trading day strictly before the calculation date.
///
/// - Tuesday..=Friday → the previous calendar day.
/// - Monday, Saturday, Sunday → the previous Friday.
pub fn find_last_trading_date_before(calculation_date: NaiveDate) -> NaiveDate {
    previous_trading_day(calculation_date)
}

// ---------------------------------------------------------------------------
// Series construction
// ---------------------------------------------------------------------------

/// Builds one calendar date per trading day in the series.
///
/// Element `n - 1` equals `last_trading_date`; each earlier element is the
/// previous trading day of its successor. `n == 0` yields an empty vector.
pub fn build_trading_dates(last_trading_date: NaiveDate, n: usize) -> Vec<NaiveDate> {
    if n == 0 {
        return Vec::new();
    }

    let mut dates = Vec::with_capacity(n);
    let mut current = last_trading_date;
    dates.push(current);
    for _ in 1..n {
        current = previous_trading_day(current);
        dates.push(current);
    }

    // Walked newest -> oldest; the series is indexed oldest -> newest.
    dates.reverse();
    dates
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

const WEEKDAY_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Human label for a day index, assuming index 0 is a Monday.
///
/// `0 → "Monday"`, `4 → "Friday"`, `5 → "Monday next week"`,
/// `12 → "Wednesday (week +2)"`.
///
/// The label is derived from the index alone, not from the resolved date.
pub fn format_day_label(day_index: usize) -> String {
    let weekday = WEEKDAY_NAMES[day_index % 5];
    match day_index / 5 {
        0 => weekday.to_string(),
        1 => format!("{weekday} next week"),
        weeks => format!("{weekday} (week +{weeks})"),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
