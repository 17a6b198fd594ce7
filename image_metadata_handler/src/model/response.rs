use std::collections::HashMap;

use serde::Serialize;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Envelope returned to the invoking platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl Response {
    /// 200 with no body
    pub fn ok() -> Self {
        Self {
            status_code: 200,
            body: None,
            headers: None,
        }
    }

    pub fn json<T: Serialize>(status_code: u16, value: &T) -> serde_json::Result<Self> {
        Ok(Self {
            status_code,
            body: Some(serde_json::to_string(value)?),
            headers: Some(HashMap::from([(
                CONTENT_TYPE.to_string(),
                APPLICATION_JSON.to_string(),
            )])),
        })
    }

    /// `{"error": message}` body
    pub fn error(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: Some(serde_json::json!({ "error": message }).to_string()),
            headers: None,
        }
    }
}
