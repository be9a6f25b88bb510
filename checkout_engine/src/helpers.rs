//! Serde helpers for the loosely-typed payloads checkout front-ends produce.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field that may arrive as a JSON string or a JSON number into a `String`.
///
/// Checkout clients are inconsistent about whether identifiers, totals and prices are quoted. Numbers are
/// rendered the way `serde_json` prints them, so `555.0` becomes `"555.0"` and integer values stay unchanged.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where D: Deserializer<'de> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("expected a string or a number, got {other}"))),
    }
}
