//! Command handler modules for bt-cli.
//!
//! Shared utilities used by multiple command paths live here.
//! Command-specific logic lives in the submodules.

pub mod compute;
pub mod dates;

use anyhow::Result;
use bt_config::{OutputFormat, UnusedKeyPolicy};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Resolve the effective output format: the `--format` flag wins over the
/// request's `output.format`.
pub fn parse_output_format(flag: Option<&str>, from_request: OutputFormat) -> Result<OutputFormat> {
    match flag {
        Some(raw) => OutputFormat::parse(raw),
        None => Ok(from_request),
    }
}

pub fn unused_key_policy(strict_keys: bool) -> UnusedKeyPolicy {
    if strict_keys {
        UnusedKeyPolicy::Fail
    } else {
        UnusedKeyPolicy::Warn
    }
}
