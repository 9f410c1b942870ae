use super::request::ConversationId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by `POST /upload-pdf`.
///
/// Success carries `conversation_id`; failures carry `detail`, either with a
/// non-2xx status or with `success: false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadPdfResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub conversation_id: Option<ConversationId>,
    /// Informational text, e.g. "PDF processed successfully"
    #[serde(default)]
    pub message: Option<String>,
    /// A string, or a list of validation errors for malformed requests
    #[serde(default)]
    pub detail: Option<Value>,
}

/// Body returned by `POST /ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    /// A string, or a list of validation errors for malformed requests
    #[serde(default)]
    pub detail: Option<Value>,
}

/// Body returned by `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Human readable text of a `detail` field.
///
/// Strings are taken as is; validation error lists (`[{"msg": ...}, ...]`)
/// are joined with "; ". Anything else yields `None`.
pub fn detail_text(detail: &Value) -> Option<String> {
    let text = match detail {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.as_str()),
                Value::Object(map) => map.get("msg").and_then(Value::as_str),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("; "),
        _ => String::new(),
    };
    (!text.is_empty()).then_some(text)
}
