//! `bt compute`: layered request -> trade search -> report.

use anyhow::{Context, Result};
use bt_config::{OutputFormat, TradeRequest};
use tracing::{info, warn};

use super::{parse_output_format, unused_key_policy};

pub fn run(config_paths: &[String], format: Option<&str>, strict_keys: bool) -> Result<()> {
    let loaded = bt_config::load_layered_yaml(config_paths)?;
    info!(request_hash = %loaded.request_hash, layers = config_paths.len(), "request loaded");

    let report = bt_config::report_unused_keys(&loaded.config_json, unused_key_policy(strict_keys))?;
    if !report.is_clean() {
        warn!(
            unused = ?report.unused_leaf_pointers,
            "request contains unused keys"
        );
    }

    let request = TradeRequest::from_loaded(&loaded)?;
    let format = parse_output_format(format, request.output.format)?;

    let series = &request.series;
    let result = bt_search::compute(
        &series.low_prices,
        &series.low_times,
        &series.high_prices,
        &series.high_times,
        request.calculation_date,
    )
    .context("trade request rejected")?;

    match format {
        OutputFormat::Pretty => println!("{}", result),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result).context("serialize result json failed")?;
            println!("{}", json);
        }
    }

    Ok(())
}
