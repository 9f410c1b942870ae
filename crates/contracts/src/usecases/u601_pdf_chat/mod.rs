pub mod file_check;
pub mod outcome;
pub mod request;
pub mod response;

pub use file_check::{validate_pdf, FileRejection, PdfCandidate};
pub use outcome::{interpret_ask, interpret_health, interpret_upload, ContractError, UploadAccepted};
pub use request::{AskRequest, ConversationId};
pub use response::{AskResponse, HealthResponse, UploadPdfResponse};

use crate::usecases::common::UseCaseMetadata;

/// Multipart field name the backend reads the PDF from
pub const UPLOAD_FIELD: &str = "file";

pub const UPLOAD_PATH: &str = "/upload-pdf";
pub const ASK_PATH: &str = "/ask";
pub const HEALTH_PATH: &str = "/health";

pub struct PdfChat;

impl UseCaseMetadata for PdfChat {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "pdf_chat"
    }

    fn display_name() -> &'static str {
        "Chat with a PDF"
    }

    fn description() -> &'static str {
        "Upload a PDF document and ask questions about its contents"
    }
}
