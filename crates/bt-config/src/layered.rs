use anyhow::{Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Merged request document plus its canonical form and fingerprint.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// SHA-256 hex of `canonical_json`.
    pub request_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

/// Read and merge YAML files in the given order.
pub fn load_layered_yaml<P: AsRef<Path>>(paths: &[P]) -> Result<LoadedConfig> {
    let mut docs: Vec<String> = Vec::with_capacity(paths.len());
    for p in paths {
        let p = p.as_ref();
        let raw = fs::read_to_string(p)
            .with_context(|| format!("failed to read request yaml: {}", p.display()))?;
        docs.push(raw);
    }

    let doc_refs: Vec<&str> = docs.iter().map(String::as_str).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

/// Merge YAML documents in order: objects merge key by key, anything else
/// (scalars, arrays) is replaced wholesale by the later document.
///
/// Empty documents are skipped, so a blank overlay file is a no-op.
pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = serde_json::json!({});
    for (i, raw) in yaml_docs.iter().enumerate() {
        let v_yaml: serde_yaml::Value =
            serde_yaml::from_str(raw).with_context(|| format!("invalid yaml in layer {i}"))?;
        let v_json = serde_json::to_value(v_yaml)
            .with_context(|| format!("yaml->json conversion failed in layer {i}"))?;
        if v_json.is_null() {
            continue;
        }
        merged = deep_merge(merged, v_json);
    }

    // serde_json's default map is ordered by key, so this is stable across
    // key order in the source documents.
    let canonical_json = serde_json::to_string(&merged).context("canonical json serialize failed")?;
    let request_hash = sha256_hex(canonical_json.as_bytes());

    Ok(LoadedConfig {
        request_hash,
        canonical_json,
        config_json: merged,
    })
}

fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let base_val = base_map.remove(&key).unwrap_or(Value::Null);
                base_map.insert(key, deep_merge(base_val, overlay_val));
            }
            Value::Object(base_map)
        }
        (_, replacement) => replacement,
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
