use anyhow::Result;
use serde_json::{Value, json};

/// What a command produced: a line for people and a value for `--json`
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub text: String,
    pub value: Value,
}

impl Outcome {
    pub fn new(text: impl Into<String>, value: Value) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }

    /// A sentinel message, reported as a plain string in both forms
    pub fn message(text: impl Into<String>) -> Self {
        let text = text.into();
        let value = Value::String(text.clone());
        Self { text, value }
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(value.to_string(), Value::Bool(value))
    }

    /// A number; non-finite values print as text and serialize as `null`
    pub fn number(value: f64) -> Self {
        let json = serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number);
        Self::new(format_number(value), json)
    }

    pub fn to_json(&self, command: &str) -> Result<String> {
        let document = json!({
            "command": command,
            "result": self.value,
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

/// Render `value` without a trailing `.0` for whole numbers
pub fn format_number(value: f64) -> String {
    format!("{value}")
}
