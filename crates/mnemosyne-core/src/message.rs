//! Log message payloads.

use serde_json::Value;

/// Payload of a leveled log call.
///
/// Strings are substituted into the line verbatim; every other value is
/// serialized as compact JSON before substitution, so a map payload shows
/// up as one JSON object inside the formatted line.
///
/// # Examples
///
/// ```rust
/// use mnemosyne_core::LogMessage;
/// use serde_json::json;
///
/// assert_eq!(LogMessage::from("plain").to_text(), "plain");
/// assert_eq!(LogMessage::from(123).to_text(), "123");
/// assert_eq!(
///     LogMessage::from(json!({"123": "123"})).to_text(),
///     r#"{"123":"123"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    /// A string payload, written as-is.
    Text(String),
    /// A structured payload, written as compact JSON.
    Json(Value),
}

impl LogMessage {
    /// Renders the payload for substitution into a log line.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            // `Value` maps are string-keyed, so Display cannot fail.
            Self::Json(v) => v.to_string(),
        }
    }
}

impl From<&str> for LogMessage {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for LogMessage {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Value> for LogMessage {
    /// A `Value::String` is already a string and stays verbatim; any other
    /// value becomes JSON.
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            other => Self::Json(other),
        }
    }
}

impl From<i64> for LogMessage {
    fn from(n: i64) -> Self {
        Self::Json(Value::from(n))
    }
}

impl From<u64> for LogMessage {
    fn from(n: u64) -> Self {
        Self::Json(Value::from(n))
    }
}

impl From<i32> for LogMessage {
    fn from(n: i32) -> Self {
        Self::Json(Value::from(n))
    }
}

impl From<f64> for LogMessage {
    fn from(n: f64) -> Self {
        Self::Json(Value::from(n))
    }
}

impl From<bool> for LogMessage {
    fn from(b: bool) -> Self {
        Self::Json(Value::from(b))
    }
}
