//! Intraday time parsing and UTC instant helpers.
//!
//! Times are accepted only in the fixed `HH:mm` form (24-hour clock,
//! zero-padded hour). Instants are always anchored at UTC; there is no
//! daylight-saving or exchange-local timezone logic.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Rendering used for instants in human-readable reports.
const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Reasons a time string is rejected by [`parse_time`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeFormatError {
    /// Empty or whitespace-only input.
    Blank,
    /// Input does not have the `HH:mm` shape.
    Malformed { raw: String },
    /// Shape is right but the hour or minute is impossible (e.g. `25:00`).
    OutOfRange { raw: String },
}

impl fmt::Display for TimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormatError::Blank => write!(f, "time value is blank"),
            TimeFormatError::Malformed { raw } => {
                write!(f, "time value '{raw}' does not match HH:mm")
            }
            TimeFormatError::OutOfRange { raw } => {
                write!(f, "time value '{raw}' is not a valid time of day")
            }
        }
    }
}

impl std::error::Error for TimeFormatError {}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a strict `HH:mm` time of day.
///
/// Rules:
/// - Exactly five ASCII characters: two digits, `:`, two digits.
/// - Hour `00..=23`, minute `00..=59`.
/// - No trimming and no leniency: `"9:30"`, `" 09:30"` and `"24:00"` are all
///   rejected.
pub fn parse_time(text: &str) -> Result<NaiveTime, TimeFormatError> {
    if text.trim().is_empty() {
        return Err(TimeFormatError::Blank);
    }

    let bytes = text.as_bytes();
    let shape_ok = bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !shape_ok {
        return Err(TimeFormatError::Malformed {
            raw: text.to_string(),
        });
    }

    let digit = |i: usize| u32::from(bytes[i] - b'0');
    let hour = digit(0) * 10 + digit(1);
    let minute = digit(3) * 10 + digit(4);

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeFormatError::OutOfRange {
        raw: text.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Instants
// ---------------------------------------------------------------------------

/// Combine a calendar date and a time of day into a UTC instant.
pub fn to_instant(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

/// Render an instant as `yyyy-MM-ddTHH:mm` (UTC, no zone suffix), or `n/a`.
pub fn format_instant(instant: Option<DateTime<Utc>>) -> String {
    match instant {
        Some(ts) => ts.format(INSTANT_FORMAT).to_string(),
        None => "n/a".to_string(),
    }
}
