use serde::{Deserialize, Serialize};

/// Opaque conversation token issued by the backend after a PDF is ingested
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub String);

impl ConversationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /ask`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub conversation_id: ConversationId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ask_request_wire_shape() {
        let request = AskRequest {
            question: "What is this about?".to_string(),
            conversation_id: ConversationId::new("c1"),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "question": "What is this about?", "conversation_id": "c1" })
        );
    }
}
