use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

/// Error text used when the webhook rejects a call without saying why
pub const UNKNOWN_ERROR: &str = "Unknown";

/// Body of a Bitrix24 REST reply.
///
/// Only an object decodes; any other JSON shape is a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookResponse {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub error_description: Option<Value>,
}

impl WebhookResponse {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("expected a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// `crm.status.add` answers with the new record id, so any truthy `result` counts
    pub fn is_ok(&self) -> bool {
        is_truthy(&self.result)
    }

    /// `error_description`, then `error`, then [`UNKNOWN_ERROR`]
    pub fn error_message(&self) -> String {
        self.error_description
            .as_ref()
            .or(self.error.as_ref())
            .map(value_text)
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
    }
}

/// JSON truthiness: null, false, zero, and empty strings/arrays/objects are false
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
