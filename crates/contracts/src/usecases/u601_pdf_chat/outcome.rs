//! Interpretation of backend responses.
//!
//! A call succeeds only when the HTTP status is ok, the body is JSON and the
//! body reports `success: true`. Any other combination is a rejection whose
//! text is the body's `detail`, or the endpoint's fallback when `detail` is
//! absent.

use super::request::ConversationId;
use super::response::{detail_text, AskResponse, HealthResponse, UploadPdfResponse};
use serde_json::Value;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const UPLOAD_FALLBACK: &str = "Failed to process PDF";
pub const ASK_FALLBACK: &str = "Failed to get response";
pub const HEALTH_FALLBACK: &str = "Backend is not healthy";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// The backend refused the request
    #[error("{0}")]
    Rejected(String),
    #[error("Invalid response from server: {0}")]
    MalformedBody(String),
    #[error("Response is missing `{0}`")]
    MissingField(&'static str),
}

/// Successful outcome of `POST /upload-pdf`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAccepted {
    pub conversation_id: ConversationId,
    pub message: Option<String>,
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ContractError> {
    serde_json::from_str(body).map_err(|e| ContractError::MalformedBody(e.to_string()))
}

fn rejection(detail: Option<Value>, fallback: &str) -> ContractError {
    ContractError::Rejected(
        detail
            .as_ref()
            .and_then(detail_text)
            .unwrap_or_else(|| fallback.to_string()),
    )
}

pub fn interpret_upload(status_ok: bool, body: &str) -> Result<UploadAccepted, ContractError> {
    let data: UploadPdfResponse = parse_body(body)?;
    if !(status_ok && data.success) {
        return Err(rejection(data.detail, UPLOAD_FALLBACK));
    }
    let conversation_id = data
        .conversation_id
        .ok_or(ContractError::MissingField("conversation_id"))?;
    Ok(UploadAccepted {
        conversation_id,
        message: data.message,
    })
}

pub fn interpret_ask(status_ok: bool, body: &str) -> Result<String, ContractError> {
    let data: AskResponse = parse_body(body)?;
    if !(status_ok && data.success) {
        return Err(rejection(data.detail, ASK_FALLBACK));
    }
    data.response.ok_or(ContractError::MissingField("response"))
}

pub fn interpret_health(status_ok: bool, body: &str) -> Result<HealthResponse, ContractError> {
    if !status_ok {
        return Err(ContractError::Rejected(HEALTH_FALLBACK.to_string()));
    }
    let data: HealthResponse = parse_body(body)?;
    if !data.is_ok() {
        return Err(ContractError::Rejected(HEALTH_FALLBACK.to_string()));
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_success() {
        let body = r#"{"success":true,"conversation_id":"c1","message":"PDF processed successfully"}"#;
        let accepted = interpret_upload(true, body).unwrap();
        assert_eq!(accepted.conversation_id, ConversationId::new("c1"));
        assert_eq!(accepted.message.as_deref(), Some("PDF processed successfully"));
    }

    #[test]
    fn test_upload_error_status_uses_detail() {
        let body = r#"{"detail":"File must be a PDF"}"#;
        assert_eq!(
            interpret_upload(false, body),
            Err(ContractError::Rejected("File must be a PDF".to_string()))
        );
    }

    #[test]
    fn test_upload_success_false_without_detail_uses_fallback() {
        assert_eq!(
            interpret_upload(true, r#"{"success":false}"#),
            Err(ContractError::Rejected(UPLOAD_FALLBACK.to_string()))
        );
    }

    #[test]
    fn test_upload_ok_status_requires_success_flag() {
        // 200 without `success` is still a failure
        assert!(matches!(
            interpret_upload(true, r#"{"conversation_id":"c1"}"#),
            Err(ContractError::Rejected(_))
        ));
    }

    #[test]
    fn test_upload_success_without_id() {
        assert_eq!(
            interpret_upload(true, r#"{"success":true}"#),
            Err(ContractError::MissingField("conversation_id"))
        );
    }

    #[test]
    fn test_non_json_body() {
        let err = interpret_upload(false, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ContractError::MalformedBody(_)));
        assert!(err.to_string().starts_with("Invalid response from server"));
    }

    #[test]
    fn test_ask_success() {
        let body = r#"{"success":true,"response":"It is about X."}"#;
        assert_eq!(interpret_ask(true, body).unwrap(), "It is about X.");
    }

    #[test]
    fn test_ask_not_found() {
        let body = r#"{"detail":"Conversation not found"}"#;
        assert_eq!(
            interpret_ask(false, body).unwrap_err().to_string(),
            "Conversation not found"
        );
    }

    #[test]
    fn test_ask_empty_detail_uses_fallback() {
        let body = r#"{"success":false,"detail":""}"#;
        assert_eq!(interpret_ask(true, body).unwrap_err().to_string(), ASK_FALLBACK);
    }

    #[test]
    fn test_error_status_overrides_success_flag() {
        let upload = r#"{"success":true,"conversation_id":"c1"}"#;
        assert_eq!(
            interpret_upload(false, upload),
            Err(ContractError::Rejected(UPLOAD_FALLBACK.to_string()))
        );
        let ask = r#"{"success":true,"response":"It is about X."}"#;
        assert_eq!(
            interpret_ask(false, ask),
            Err(ContractError::Rejected(ASK_FALLBACK.to_string()))
        );
    }

    #[test]
    fn test_validation_error_list_detail() {
        let body = r#"{"detail":[{"loc":["body","question"],"msg":"field required","type":"value_error.missing"}]}"#;
        assert_eq!(
            interpret_ask(false, body),
            Err(ContractError::Rejected("field required".to_string()))
        );
        // a list without messages still reads as a rejection
        assert_eq!(
            interpret_upload(false, r#"{"detail":[{"loc":["body","file"]}]}"#),
            Err(ContractError::Rejected(UPLOAD_FALLBACK.to_string()))
        );
    }

    #[test]
    fn test_health() {
        assert!(interpret_health(true, r#"{"status":"ok"}"#).is_ok());
        assert!(interpret_health(true, r#"{"status":"degraded"}"#).is_err());
        assert!(interpret_health(false, r#"{"status":"ok"}"#).is_err());
    }
}
