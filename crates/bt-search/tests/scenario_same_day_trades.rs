//! Same-day trade selection and tie-breaking.
//!
//! GREEN when:
//! - An intraday spike that beats every cross-day trade is selected with
//!   buy day == sell day.
//! - A same-day candidate that only ties the best cross-day trade does not
//!   displace it.
//! - Among equal same-day candidates the earliest day wins.

use bt_search::*;
use chrono::{DateTime, NaiveDate, Utc};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

/// Day 3 (Thu 2025-10-30): low 47 at 10:40, high 80 at 15:10 → 33.
#[test]
fn intraday_spike_beats_cross_day() {
    let lows = [50.0, 52.0, 48.0, 47.0, 49.0, 46.0, 45.0, 44.0, 43.0, 42.0];
    let low_times = [
        "11:00", "10:20", "11:10", "10:40", "11:30", "10:15", "11:05", "10:50", "11:25", "10:45",
    ];
    let highs = [55.0, 58.0, 52.0, 80.0, 60.0, 59.0, 57.0, 56.0, 54.0, 53.0];
    let high_times = [
        "15:20", "15:45", "16:00", "15:10", "15:55", "15:30", "16:05", "15:40", "15:15", "16:20",
    ];
    let calc = ymd(2025, 11, 10);

    let r = compute(&lows, &low_times, &highs, &high_times, calc).unwrap();

    assert_eq!(r.max_profit, 33);
    assert_eq!((r.buy_day, r.sell_day), (3, 3));
    assert_eq!((r.buy_price, r.sell_price), (47, 80));
    assert_eq!(r.calculation_date, calc);
    assert_eq!(r.buy_time, Some(utc("2025-10-30T10:40:00Z")));
    assert_eq!(r.sell_time, Some(utc("2025-10-30T15:10:00Z")));
}

/// A lone valid day is a same-day trade.
#[test]
fn single_valid_day_is_a_same_day_trade() {
    let r = compute(&[100.0], &["10:00"], &[120.0], &["15:00"], ymd(2025, 11, 6)).unwrap();

    assert_eq!(r.max_profit, 20);
    assert_eq!((r.buy_day, r.sell_day), (0, 0));
    // 2025-11-06 (Thu) resolves to Wednesday 2025-11-05.
    assert_eq!(r.buy_time, Some(utc("2025-11-05T10:00:00Z")));
    assert_eq!(r.sell_time, Some(utc("2025-11-05T15:00:00Z")));
}

/// Cross-day 0→1 = 10, same-day on day 1 = 10: the cross-day trade stays.
#[test]
fn tie_with_cross_day_keeps_cross_day() {
    let r = compute(
        &[10.0, 10.0],
        &["12:00", "10:00"],
        &[11.0, 20.0],
        &["09:00", "15:00"],
        ymd(2025, 11, 10),
    )
    .unwrap();

    assert_eq!(r.max_profit, 10);
    assert_eq!((r.buy_day, r.sell_day), (0, 1));
}

/// Both days spike by 30 and the cross-day pair loses money.
#[test]
fn equal_spikes_keep_earliest_day() {
    let lows = [100.0, 50.0];
    let highs = [130.0, 80.0];
    let low_times = ["10:00", "10:00"];
    let high_times = ["15:00", "15:00"];

    let r = compute(&lows, &low_times, &highs, &high_times, ymd(2025, 11, 10)).unwrap();

    assert_eq!(r.max_profit, 30);
    assert_eq!((r.buy_day, r.sell_day), (0, 0));
}

/// The cross-day pair breaks even; day 1's 40 beats day 0's 20.
#[test]
fn larger_later_spike_wins() {
    let lows = [100.0, 60.0];
    let highs = [120.0, 100.0];
    let low_times = ["09:00", "09:00"];
    let high_times = ["16:00", "16:00"];

    let r = compute(&lows, &low_times, &highs, &high_times, ymd(2025, 11, 10)).unwrap();

    assert_eq!(r.max_profit, 40);
    assert_eq!((r.buy_day, r.sell_day), (1, 1));
    assert_eq!((r.buy_price, r.sell_price), (60, 100));
}

/// Cross-day 0→2 and same-day on day 2 both reach 40; cross-day is seen first.
#[test]
fn cross_day_is_evaluated_before_an_equal_spike() {
    let lows = [100.0, 100.0, 100.0];
    let highs = [100.0, 110.0, 140.0];
    let low_times = ["09:00", "09:00", "09:00"];
    let high_times = ["16:00", "16:00", "16:00"];

    let r = compute(&lows, &low_times, &highs, &high_times, ymd(2025, 11, 10)).unwrap();

    assert_eq!(r.max_profit, 40);
    assert_eq!((r.buy_day, r.sell_day), (0, 2));
}
