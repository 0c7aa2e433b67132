//! bt-calendar
//!
//! Maps a logical calculation date and a day count onto concrete trading
//! dates, and binds those dates to intraday times as UTC instants.
//!
//! Pure deterministic logic. No IO, no wall-clock. Only Saturday and Sunday
//! are non-trading days; there is no holiday table.

mod calendar;
mod time;

pub use calendar::{
    build_trading_dates, find_last_trading_date_before, format_day_label, is_trading_day,
    previous_trading_day,
};
pub use time::{format_instant, parse_time, to_instant, TimeFormatError};
