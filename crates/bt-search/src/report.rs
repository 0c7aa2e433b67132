//! Human-readable rendering of a [`BestTradingResult`].

use std::fmt;

use bt_calendar::{format_day_label, format_instant};

use crate::types::BestTradingResult;

/// Multi-line summary of the result.
///
/// Falls back to the fixed no-trade message when the rounded profit is not
/// positive or either day index is missing.
pub fn to_pretty_string(result: &BestTradingResult) -> String {
    let days = (usize::try_from(result.buy_day), usize::try_from(result.sell_day));
    let (buy_day, sell_day) = match days {
        (Ok(buy), Ok(sell)) if result.max_profit > 0 => (buy, sell),
        _ => return no_trade_message(result),
    };

    [
        format!(
            "Best buy is Day {buy_day} at {} \u{2192} sell Day {sell_day} at {}",
            result.buy_price, result.sell_price
        ),
        format!("maxProfit = {}", result.max_profit),
        format!(
            "buyDay = {buy_day} ({}),  buyPrice = {:.2} at {}",
            format_day_label(buy_day),
            result.buy_price as f64,
            format_instant(result.buy_time)
        ),
        format!(
            "sellDay = {sell_day} ({}), sellPrice = {:.2} at {}",
            format_day_label(sell_day),
            result.sell_price as f64,
            format_instant(result.sell_time)
        ),
        format!("calculationDate = {}", result.calculation_date),
    ]
    .join("\n")
}

fn no_trade_message(result: &BestTradingResult) -> String {
    format!(
        "No profitable trade was found.\n\
         maxProfit = 0\n\
         buyDay = -1, sellDay = -1\n\
         buyPrice = 0, sellPrice = 0\n\
         calculationDate = {}",
        result.calculation_date
    )
}

impl fmt::Display for BestTradingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_pretty_string(self))
    }
}
