//! Marker-file loading and normalization.
//!
//! Input is an array of loosely typed objects. Elements that are not objects
//! are skipped, and so are objects missing a coordinate (later, at draw time).
//! Anything that looks like a typo (an unknown string name, a color the
//! renderer cannot show, a non-numeric fret) fails the whole file.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{MarkerRecord, string_slot};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const FRET_KEY: &str = "fret";
const STRING_KEY: &str = "string";
const LEGACY_X_KEY: &str = "x";
const LEGACY_Y_KEY: &str = "y";
const RADIUS_KEY: &str = "radius";
const COLOR_KEY: &str = "color";

/// Reads and normalizes a marker file.
pub fn load_markers(path: impl AsRef<Path>) -> ChartResult<Vec<MarkerRecord>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => {
            ChartError::MalformedInput(format!("file {} does not exist", path.display()))
        }
        _ => ChartError::MalformedInput(format!("failed to read '{}': {err}", path.display())),
    })?;

    let records = parse_markers(&raw)?;
    debug!(path = %path.display(), count = records.len(), "loaded marker records");
    Ok(records)
}

/// Parses marker JSON text.
pub fn parse_markers(raw: &str) -> ChartResult<Vec<MarkerRecord>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|err| ChartError::MalformedInput(format!("invalid JSON: {err}")))?;
    normalize_markers(&value)
}

/// Normalizes an already parsed document, preserving element order.
pub fn normalize_markers(value: &Value) -> ChartResult<Vec<MarkerRecord>> {
    let Value::Array(entries) = value else {
        return Err(ChartError::Schema("JSON must contain a list of marker specs".to_owned()));
    };

    entries
        .iter()
        .filter_map(Value::as_object)
        .map(normalize_record)
        .collect()
}

fn normalize_record(entry: &Map<String, Value>) -> ChartResult<MarkerRecord> {
    let fret = match preferred(entry, FRET_KEY, LEGACY_X_KEY) {
        Some((key, value)) => number_field(key, value)?,
        None => None,
    };
    let string = match preferred(entry, STRING_KEY, LEGACY_Y_KEY) {
        Some((key, value)) => string_field(key, value)?,
        None => None,
    };

    let radius = match entry.get(RADIUS_KEY) {
        Some(value) => number_field(RADIUS_KEY, value)?,
        None => None,
    };
    if let Some(radius) = radius
        && radius <= 0.0
    {
        return Err(ChartError::Schema(format!("radius must be > 0, got {radius}")));
    }

    let color = match entry.get(COLOR_KEY) {
        None | Some(Value::Null) => None,
        Some(Value::String(name)) => {
            Color::parse(name)?;
            Some(name.clone())
        }
        Some(other) => {
            return Err(ChartError::Schema(format!("color must be a string, got {other}")));
        }
    };

    Ok(MarkerRecord {
        fret,
        string,
        radius,
        color,
    })
}

/// Returns the current key's entry, or the legacy key's when the current one
/// is absent. A present `null` still hides the legacy key.
fn preferred<'a>(
    entry: &'a Map<String, Value>,
    key: &'static str,
    legacy: &'static str,
) -> Option<(&'static str, &'a Value)> {
    entry
        .get(key)
        .map(|value| (key, value))
        .or_else(|| entry.get(legacy).map(|value| (legacy, value)))
}

fn number_field(key: &str, value: &Value) -> ChartResult<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => number
            .as_f64()
            .filter(|number| number.is_finite())
            .map(Some)
            .ok_or_else(|| ChartError::Schema(format!("{key} must be a finite number"))),
        other => Err(ChartError::Schema(format!("{key} must be a number, got {other}"))),
    }
}

fn string_field(key: &str, value: &Value) -> ChartResult<Option<f64>> {
    match value {
        Value::String(symbol) => string_slot(symbol).map(Some),
        other => number_field(key, other),
    }
}
