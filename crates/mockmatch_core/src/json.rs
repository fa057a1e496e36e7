//! Conversion from JSON documents into comparable values.
//!
//! Objects become plain records, arrays sequences, numbers `Number`, strings
//! `Text`, and `null` becomes `Null`. JSON has no `Undefined`, no matchers
//! and no cycles, so converted documents are always literal trees.

use crate::errors::JsonError;
use crate::value::Value;

/// Convert a parsed JSON document.
///
/// Numbers outside the `f64` range never get here: `serde_json` rejects them
/// while parsing.
pub fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::text(s),
        serde_json::Value::Array(items) => {
            Value::sequence(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(fields) => Value::record(
            fields
                .into_iter()
                .map(|(key, field)| (key, from_json(field)))
                .collect::<Vec<_>>(),
        ),
    }
}

/// Parse JSON text and convert it.
pub fn parse(text: &str) -> Result<Value, JsonError> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    Ok(from_json(json))
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        from_json(json)
    }
}
