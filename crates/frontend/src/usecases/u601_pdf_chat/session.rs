//! Upload/Chat session state.
//!
//! Holds everything the page knows between events: which panel is shown,
//! the conversation issued by the backend and the message list. No DOM and no
//! signals here, so every transition is testable on the host.

use chrono::{DateTime, Utc};
use contracts::usecases::u601_pdf_chat::{
    validate_pdf, AskRequest, ConversationId, FileRejection, PdfCandidate, UploadAccepted,
};
use thiserror::Error;
use uuid::Uuid;

pub const WELCOME_TEXT: &str = "PDF processed successfully! You can now ask questions about it.";
pub const THINKING_TEXT: &str = "Thinking...";

/// Mutually exclusive page mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Upload,
    Loading,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub text: String,
    /// Placeholder waiting for an answer
    pub temporary: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn new(role: Role, text: impl Into<String>, temporary: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            temporary,
            created_at: Utc::now(),
        }
    }
}

/// Handle of one in-flight question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AskTicket {
    pub seq: u64,
    pub placeholder: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    NotPdf(#[from] FileRejection),
    #[error("A PDF can only be uploaded from the upload panel (current: {0:?})")]
    UploadNotAllowed(ViewState),
    #[error("Please upload a PDF first")]
    NoConversation,
    #[error("No question in flight with sequence {0}")]
    UnknownTicket(u64),
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    view: ViewState,
    conversation_id: Option<ConversationId>,
    messages: Vec<Message>,
    next_seq: u64,
    in_flight: Vec<AskTicket>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            view: ViewState::Upload,
            conversation_id: None,
            messages: Vec::new(),
            next_seq: 0,
            in_flight: Vec::new(),
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn conversation_id(&self) -> Option<&ConversationId> {
        self.conversation_id.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Questions sent and not yet answered
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    fn push(&mut self, message: Message) -> Uuid {
        let id = message.id;
        self.messages.push(message);
        id
    }

    /// Checks the file and switches to the loading panel.
    ///
    /// On `Err` nothing changes and no upload must be sent.
    pub fn begin_upload(&mut self, file: &PdfCandidate) -> Result<(), SessionError> {
        if self.view != ViewState::Upload {
            return Err(SessionError::UploadNotAllowed(self.view));
        }
        validate_pdf(file)?;
        self.view = ViewState::Loading;
        Ok(())
    }

    /// Applies the upload outcome. On failure returns the alert text and goes
    /// back to the upload panel without keeping any conversation.
    pub fn finish_upload(&mut self, outcome: Result<UploadAccepted, String>) -> Result<(), String> {
        match outcome {
            Ok(accepted) => {
                self.conversation_id = Some(accepted.conversation_id);
                self.view = ViewState::Chat;
                self.push(Message::new(Role::Assistant, WELCOME_TEXT, false));
                Ok(())
            }
            Err(e) => {
                self.conversation_id = None;
                self.view = ViewState::Upload;
                Err(format!("Error: {}", e))
            }
        }
    }

    /// Registers a question.
    ///
    /// Blank input is ignored (`Ok(None)`). Otherwise the user message and a
    /// "Thinking..." placeholder are appended, and the request to send is
    /// returned together with the ticket that `finish_ask` expects.
    pub fn begin_ask(&mut self, raw: &str) -> Result<Option<(AskTicket, AskRequest)>, SessionError> {
        let question = raw.trim();
        if question.is_empty() {
            return Ok(None);
        }
        let conversation_id = self
            .conversation_id
            .clone()
            .ok_or(SessionError::NoConversation)?;

        self.push(Message::new(Role::User, question, false));
        let placeholder = self.push(Message::new(Role::Assistant, THINKING_TEXT, true));

        let ticket = AskTicket {
            seq: self.next_seq,
            placeholder,
        };
        self.next_seq += 1;
        self.in_flight.push(ticket);

        Ok(Some((
            ticket,
            AskRequest {
                question: question.to_string(),
                conversation_id,
            },
        )))
    }

    /// Replaces the ticket's placeholder with the answer, or with the error
    /// text. The answer stays right after its own question whatever order
    /// responses arrive in.
    pub fn finish_ask(&mut self, ticket: AskTicket, outcome: Result<String, String>) -> Result<(), SessionError> {
        let pos = self
            .in_flight
            .iter()
            .position(|t| *t == ticket)
            .ok_or(SessionError::UnknownTicket(ticket.seq))?;
        self.in_flight.remove(pos);

        let text = match outcome {
            Ok(answer) => answer,
            Err(e) => format!("Error: {}", e),
        };
        let answer = Message::new(Role::Assistant, text, false);

        match self.messages.iter().position(|m| m.id == ticket.placeholder) {
            Some(idx) => self.messages[idx] = answer,
            None => {
                self.push(answer);
            }
        }
        Ok(())
    }
}
