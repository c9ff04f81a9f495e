//! Lenient serde decoders.
//!
//! Upstream rows are sometimes incomplete: numbers arrive as strings, as `null`,
//! or not at all. Numeric fields decode such values to `0` instead of failing,
//! while optional per-40 fields keep "absent" distinct from zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;


/// Interpret a JSON value as a finite number, if it is one.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|v| v.is_finite())
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&raw).unwrap_or(0.0))
}

/// `null` stays absent; any other value is coerced (non-numeric becomes `0`).
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(None);
    }
    Ok(Some(coerce_f64(&raw).unwrap_or(0.0)))
}

pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&raw)
        .map(|v| v.max(0.0).round() as u32)
        .unwrap_or(0))
}

/// Minutes may be `"MM:SS"` text, numeric text, or a number.
pub fn lenient_minutes<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::String(s) => super::game_log::parse_minutes(&s),
        other => coerce_f64(&other).unwrap_or(0.0),
    })
}

pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

pub fn opt_trimmed_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = string_or_number(deserializer)?;
    let trimmed = raw.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}
