//! Loading record collections from JSON.
//!
//! The view model never fetches data itself; these helpers are the
//! convenience path for callers (and test fixtures) that keep their
//! datasets as JSON documents. Both a bare array and the conventional
//! `{"data": [...]}` export wrapper are accepted.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{FinopsError, Result};

/// Deserialize a record collection from a parsed JSON value.
///
/// Accepts either a top-level array or an object wrapping the array in a
/// `data` field.
pub fn from_value<R: DeserializeOwned>(value: Value) -> Result<Vec<R>> {
    let payload = match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    };

    match payload {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(FinopsError::from))
            .collect(),
        _ => Err(FinopsError::InvalidArgument(
            "expected a JSON array of records".to_string(),
        )),
    }
}

/// Deserialize a record collection from a JSON string.
pub fn from_json_str<R: DeserializeOwned>(json: &str) -> Result<Vec<R>> {
    from_value(serde_json::from_str(json)?)
}

/// Deserialize a record collection from a JSON file on disk.
pub fn from_json_file<R: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<R>> {
    from_json_str(&fs::read_to_string(path)?)
}
