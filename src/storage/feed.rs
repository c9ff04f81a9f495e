//! Decoding of JSON feeds into typed rows.

use crate::engine::stats::json_kind;
use crate::error::{Result, StatsError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Decode a feed that must be an array of JSON objects.
///
/// Field-level problems (missing values, text where numbers belong) are
/// absorbed by the lenient row decoders. Only a feed that is not an array, or
/// an element that is not an object, is rejected.
///
/// # Examples
///
/// ```rust
/// use hoops_stats::{storage::feed::decode_rows, ShotEvent};
/// use serde_json::json;
///
/// let shots: Vec<ShotEvent> = decode_rows(json!([{ "zone": "paint", "points": 2 }])).unwrap();
/// assert!(shots[0].is_made());
///
/// assert!(decode_rows::<ShotEvent>(json!({ "zone": "paint" })).is_err());
/// ```
pub fn decode_rows<T: DeserializeOwned>(feed: Value) -> Result<Vec<T>> {
    let Value::Array(items) = feed else {
        return Err(StatsError::structural(format!(
            "expected an array of records, got {}",
            json_kind(&feed)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(StatsError::structural(format!(
                    "record {index} is {}, expected an object",
                    json_kind(&item)
                )));
            }
            Ok(serde_json::from_value(item)?)
        })
        .collect()
}

/// Read and decode a JSON feed file.
pub fn read_feed<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = std::fs::read_to_string(path)?;
    let feed: Value = serde_json::from_str(&text)?;
    let rows = decode_rows(feed)?;
    debug!(path = %path.display(), rows = rows.len(), "decoded feed");
    Ok(rows)
}
