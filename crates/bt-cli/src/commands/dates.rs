//! `bt dates`: show which calendar days a series of N trading days maps onto.

use bt_calendar::{build_trading_dates, find_last_trading_date_before};
use chrono::{Datelike, NaiveDate};

pub fn run(calculation_date: NaiveDate, days: usize) {
    for line in date_lines(calculation_date, days) {
        println!("{line}");
    }
}

fn date_lines(calculation_date: NaiveDate, days: usize) -> Vec<String> {
    let last = find_last_trading_date_before(calculation_date);
    build_trading_dates(last, days)
        .into_iter()
        .enumerate()
        .map(|(i, d)| format!("{i} {d} {}", d.weekday()))
        .collect()
}
