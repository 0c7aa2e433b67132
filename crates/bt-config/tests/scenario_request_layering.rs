//! Request layering and typed decoding.
//!
//! GREEN when:
//! - A later file replaces a whole series list, not element by element.
//! - `output.format` defaults to pretty when omitted.
//! - A missing series field is an error that names the field.
//! - Files on disk load the same as the equivalent strings.

use bt_config::{
    load_layered_yaml, load_layered_yaml_from_strings, OutputFormat, TradeRequest,
};
use chrono::NaiveDate;
use std::io::Write;

const BASE_YAML: &str = r#"
calculation_date: "2025-11-10"
series:
  low_prices: [100.0, 98.0, 103.0]
  low_times: ["10:00", "11:30", "09:45"]
  high_prices: [105.0, 110.0, 107.0]
  high_times: ["15:00", "15:30", "14:00"]
"#;

#[test]
fn overlay_replaces_whole_series_list() {
    let overlay = r#"
calculation_date: "2025-11-09"
series:
  high_prices: [120.0, 121.0, 122.0]
output:
  format: json
"#;
    let loaded = load_layered_yaml_from_strings(&[BASE_YAML, overlay]).expect("load");
    let req = TradeRequest::from_loaded(&loaded).expect("decode");

    assert_eq!(
        req.calculation_date,
        NaiveDate::from_ymd_opt(2025, 11, 9).unwrap()
    );
    assert_eq!(req.series.high_prices, vec![120.0, 121.0, 122.0]);
    assert_eq!(req.series.low_prices, vec![100.0, 98.0, 103.0]);
    assert_eq!(req.series.high_times, vec!["15:00", "15:30", "14:00"]);
    assert_eq!(req.output.format, OutputFormat::Json);
}

#[test]
fn output_format_defaults_to_pretty() {
    let loaded = load_layered_yaml_from_strings(&[BASE_YAML]).expect("load");
    let req = TradeRequest::from_loaded(&loaded).expect("decode");
    assert_eq!(req.output.format, OutputFormat::Pretty);
}

#[test]
fn missing_series_field_is_an_error() {
    let yaml = r#"
calculation_date: "2025-11-10"
series:
  low_prices: [100.0]
  low_times: ["10:00"]
  high_prices: [105.0]
"#;
    let loaded = load_layered_yaml_from_strings(&[yaml]).expect("load");
    let err = TradeRequest::from_loaded(&loaded).expect_err("must reject");
    let msg = format!("{err:#}");
    assert!(msg.contains("invalid trade request"), "{msg}");
    assert!(msg.contains("high_times"), "{msg}");
}

#[test]
fn bad_calculation_date_is_an_error() {
    let bad = r#"
calculation_date: "2025-13-40"
"#;
    let loaded = load_layered_yaml_from_strings(&[BASE_YAML, bad]).expect("load");
    assert!(TradeRequest::from_loaded(&loaded).is_err());
}

#[test]
fn files_load_like_strings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base_path = dir.path().join("base.yaml");
    let overlay_path = dir.path().join("overlay.yaml");

    let overlay = "output:\n  format: json\n";
    std::fs::File::create(&base_path)
        .and_then(|mut f| f.write_all(BASE_YAML.as_bytes()))
        .expect("write base");
    std::fs::File::create(&overlay_path)
        .and_then(|mut f| f.write_all(overlay.as_bytes()))
        .expect("write overlay");

    let from_files = load_layered_yaml(&[&base_path, &overlay_path]).expect("load files");
    let from_strings = load_layered_yaml_from_strings(&[BASE_YAML, overlay]).expect("load strings");

    assert_eq!(from_files.request_hash, from_strings.request_hash);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.yaml");
    let err = load_layered_yaml(&[&missing]).expect_err("must fail");
    assert!(format!("{err:#}").contains("nope.yaml"));
}
