//! u601: chat with an uploaded PDF
//!
//! Structure:
//! - session.rs: ChatSession state machine (host-testable, no DOM)
//! - api.rs: HTTP calls to the backend
//! - view_model.rs: PdfChatVm with RwSignals
//! - view.rs: page component PdfChatPage
//! - drop_zone.rs, message_list.rs: panel components

mod api;
mod drop_zone;
mod message_list;
pub mod session;
mod view;
mod view_model;

pub use view::PdfChatPage;
pub use view_model::PdfChatVm;
