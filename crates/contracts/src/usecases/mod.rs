pub mod common;
pub mod u601_pdf_chat;
