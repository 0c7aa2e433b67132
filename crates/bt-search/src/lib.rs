//! bt-search
//!
//! Best single buy/sell trade over a bounded series of trading days.
//!
//! Architectural decisions:
//! - At most one trade: buy once, sell once on a strictly later day, or on the
//!   same day when the low time is strictly before the high time
//! - Shape and format errors are rejected before the scan (fail-fast)
//! - "No trade" is a normal result value, never an error
//! - Ties resolve to the first candidate seen (cross-day pass first)
//!
//! Pure deterministic logic. No IO, no shared state between calls.

mod engine;
mod report;
mod series;
mod types;
mod validate;

pub use engine::{compute, search, TradeCandidate};
pub use report::to_pretty_string;
pub use series::{resolve_series, ResolvedDay};
pub use types::{round_half_up, BestTradingResult, NO_DAY};
pub use validate::{validate_prices, validate_shape, TradeInputError};
