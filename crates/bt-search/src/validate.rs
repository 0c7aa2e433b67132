//! Pre-scan input validation.
//!
//! Everything here runs before the search touches a single price. A failure
//! aborts the whole computation; there is never a partial result.

use std::fmt;

use bt_calendar::TimeFormatError;
use tracing::warn;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Input rejected before the search runs.
///
/// Distinct from the no-trade outcome, which is a successful result.
#[derive(Debug, Clone, PartialEq)]
pub enum TradeInputError {
    /// The four parallel sequences do not share one length.
    SizeMismatch {
        low_prices: usize,
        low_times: usize,
        high_prices: usize,
        high_times: usize,
    },
    /// A time string failed strict `HH:mm` parsing.
    InvalidTimeFormat {
        field: &'static str,
        index: usize,
        source: TimeFormatError,
    },
    /// A price is NaN or infinite.
    NonFinitePrice {
        field: &'static str,
        index: usize,
        value: f64,
    },
}

impl fmt::Display for TradeInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeInputError::SizeMismatch {
                low_prices,
                low_times,
                high_prices,
                high_times,
            } => write!(
                f,
                "all input lists must have the same size \
                 (lowPrices={low_prices}, lowTimes={low_times}, \
                 highPrices={high_prices}, highTimes={high_times})"
            ),
            TradeInputError::InvalidTimeFormat {
                field,
                index,
                source,
            } => write!(f, "{field}[{index}] has invalid time value: {source}"),
            TradeInputError::NonFinitePrice {
                field,
                index,
                value,
            } => write!(f, "{field}[{index}] is not a finite price: {value}"),
        }
    }
}

impl std::error::Error for TradeInputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TradeInputError::InvalidTimeFormat { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Require all four sequences to have one common length, and return it.
pub fn validate_shape<S: AsRef<str>>(
    low_prices: &[f64],
    low_times: &[S],
    high_prices: &[f64],
    high_times: &[S],
) -> Result<usize, TradeInputError> {
    let n = low_prices.len();
    if low_times.len() != n || high_prices.len() != n || high_times.len() != n {
        return Err(TradeInputError::SizeMismatch {
            low_prices: n,
            low_times: low_times.len(),
            high_prices: high_prices.len(),
            high_times: high_times.len(),
        });
    }
    Ok(n)
}

/// Reject non-finite prices.
///
/// A day whose low exceeds its high is tolerated and takes part in the
/// arithmetic unchanged; it is only logged.
pub fn validate_prices(low_prices: &[f64], high_prices: &[f64]) -> Result<(), TradeInputError> {
    for (index, (&low, &high)) in low_prices.iter().zip(high_prices).enumerate() {
        if !low.is_finite() {
            return Err(TradeInputError::NonFinitePrice {
                field: "lowPrices",
                index,
                value: low,
            });
        }
        if !high.is_finite() {
            return Err(TradeInputError::NonFinitePrice {
                field: "highPrices",
                index,
                value: high,
            });
        }
        if low > high {
            warn!(index, low, high, "intraday low exceeds intraday high; keeping day as given");
        }
    }
    Ok(())
}
