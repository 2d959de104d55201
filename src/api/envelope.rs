/// Response envelope shared by the driver and the resolution backend
use crate::document::types::nullable;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message carried by successful envelopes
pub const SUCCESS_MESSAGE: &str = "Success";

/// `{status, message, data}` wrapper used on both sides of the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, deserialize_with = "nullable")]
    pub status: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn success(document: Map<String, Value>) -> Self {
        Self {
            status: 200,
            message: SUCCESS_MESSAGE.to_string(),
            data: Some(Value::Object(document)),
        }
    }

    pub fn failure(status: i64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }

    /// Parse a backend body
    ///
    /// The body goes through a generic JSON value first, so a repeated key
    /// keeps its last value instead of failing the parse.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        serde_json::from_value(value)
    }

    /// True if a backend envelope reports a successful resolution
    pub fn is_success(&self) -> bool {
        self.status == 200 && self.message == SUCCESS_MESSAGE
    }
}
