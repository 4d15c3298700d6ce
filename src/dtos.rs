use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SERVER_ERROR_FALLBACK: &str = "Ошибка сервера";

/// Error payload returned by the checkout service on a non-2xx status.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ApiError {
    /// Message to show the user. Falsy `error` values fall back to the generic server message.
    pub fn message(&self) -> String {
        match &self.error {
            None | Some(Value::Null) | Some(Value::Bool(false)) => String::from(SERVER_ERROR_FALLBACK),
            Some(Value::String(s)) if s.is_empty() => String::from(SERVER_ERROR_FALLBACK),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::from(SERVER_ERROR_FALLBACK),
            Some(other) => other.to_string(),
        }
    }
}
