//! bt-config
//!
//! Trade requests as layered YAML documents.
//!
//! Documents merge in order (earlier = base, later = override), are
//! canonicalized to JSON and fingerprinted with SHA-256 so the same request
//! always carries the same `request_hash`. An unused-key guard catches
//! misspelled fields before they silently fall back to defaults.

mod layered;
mod request;
mod unused;

pub use layered::{load_layered_yaml, load_layered_yaml_from_strings, LoadedConfig};
pub use request::{OutputFormat, OutputSection, SeriesInput, TradeRequest};
pub use unused::{report_unused_keys, UnusedKeyPolicy, UnusedKeyReport, CONSUMED_POINTERS};
