use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::layered::LoadedConfig;

/// How the CLI renders a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(OutputFormat::Pretty),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!(
                "invalid output format '{}'. expected one of: pretty | json",
                other
            )),
        }
    }
}

/// The four parallel per-day sequences, exactly as supplied.
///
/// Lengths are not checked here; the search crate owns that rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesInput {
    pub low_prices: Vec<f64>,
    pub low_times: Vec<String>,
    pub high_prices: Vec<f64>,
    pub high_times: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Typed view of a merged request document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub calculation_date: NaiveDate,
    pub series: SeriesInput,
    #[serde(default)]
    pub output: OutputSection,
}

impl TradeRequest {
    /// Every series field and the calculation date are required; a missing
    /// one (or a null element inside a list) is an error, not a default.
    pub fn from_loaded(loaded: &LoadedConfig) -> Result<Self> {
        serde_json::from_value(loaded.config_json.clone()).context("invalid trade request")
    }
}
