//! Reading input records from files and `key=value` overrides.

use crate::error::Co2Error;
use co2calc_schemas::{
    category::EmissionCategory,
    input::{parse_quantity_or_warn, InputRecord},
};
use log::debug;
use std::{fs, path::Path};

/// Loads an input record from a YAML (`.yaml`/`.yml`) or JSON (`.json`) file.
pub fn load_input_record<P: AsRef<Path>>(path: P) -> Result<InputRecord, Co2Error> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let content = match extension.as_deref() {
        Some("yaml") | Some("yml") | Some("json") => {
            fs::read_to_string(path).map_err(|e| Co2Error::FileIO(display.clone(), e))?
        }
        _ => return Err(Co2Error::UnsupportedInputFormat(display)),
    };

    let record: InputRecord = if extension.as_deref() == Some("json") {
        serde_json::from_str(&content).map_err(|e| Co2Error::JsonParsing(display.clone(), e))?
    } else if content.trim().is_empty() {
        // serde_yaml rejects an empty document; an empty form is all zeros.
        InputRecord::default()
    } else {
        serde_yaml::from_str(&content).map_err(|e| Co2Error::YamlParsing(display.clone(), e))?
    };
    debug!("Loaded input record from '{}': {:?}", display, record);
    Ok(record)
}

/// Parses a single `key=value` override.
///
/// The key must name a category; the value is parsed leniently.
pub fn parse_override(raw: &str) -> Result<(EmissionCategory, f64), Co2Error> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| Co2Error::ConfigError(format!("Expected key=value, got '{}'", raw)))?;
    let key = key.trim();
    let category =
        EmissionCategory::from_key(key).ok_or_else(|| Co2Error::UnknownCategory(key.to_string()))?;
    Ok((category, lenient(category, value)))
}

/// Parses every override, failing on the first unknown category.
pub fn parse_overrides(raw: &[String]) -> Result<Vec<(EmissionCategory, f64)>, Co2Error> {
    raw.iter().map(|r| parse_override(r)).collect()
}

pub fn apply_overrides(record: &mut InputRecord, overrides: &[(EmissionCategory, f64)]) {
    for &(category, quantity) in overrides {
        record.set(category, quantity);
    }
}

/// Parses a raw quantity for `category`, logging when it has to fall back to zero.
pub fn lenient(category: EmissionCategory, raw: &str) -> f64 {
    parse_quantity_or_warn(raw, category.key())
}
