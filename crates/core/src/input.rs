//! Loosely typed inputs.
//!
//! The exercise functions accept arguments that may be of the wrong type, and
//! rejecting those is part of what the tests check. Such arguments are carried
//! as [`serde_json::Value`] and narrowed here.

use serde_json::Value;

/// Parse a raw command-line argument as a JSON literal, falling back to a
/// plain string when it is not valid JSON.
///
/// `"42"` becomes a number, `"true"` a boolean, `"\"42\""` a string and `abc`
/// the string `"abc"`.
pub fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// The numeric value, if `value` is a JSON number.
pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// The string value, if `value` is a JSON string.
pub fn as_text(value: &Value) -> Option<&str> {
    value.as_str()
}

/// Name of the JSON type of `value`
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
