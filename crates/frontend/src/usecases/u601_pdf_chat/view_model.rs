//! PDF Chat - View Model

use super::api;
use super::session::{ChatSession, Message, ViewState};
use crate::shared::notify;
use contracts::usecases::u601_pdf_chat::PdfCandidate;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct PdfChatVm {
    pub session: RwSignal<ChatSession>,
    pub question: RwSignal<String>,
    pub is_dragover: RwSignal<bool>,
    /// `None` until the health check has answered
    pub backend_online: RwSignal<Option<bool>>,
}

impl PdfChatVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
            question: RwSignal::new(String::new()),
            is_dragover: RwSignal::new(false),
            backend_online: RwSignal::new(None),
        }
    }

    pub fn view_state(&self) -> Memo<ViewState> {
        let session = self.session;
        Memo::new(move |_| session.with(|s| s.view()))
    }

    pub fn messages(&self) -> Signal<Vec<Message>> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.messages().to_vec()))
    }

    /// Validate and upload a file picked by drop or by the file dialog.
    /// `on_ready` runs once the chat panel is shown.
    pub fn upload(&self, file: web_sys::File, on_ready: impl FnOnce() + 'static) {
        let candidate = PdfCandidate::new(file.name(), file.type_(), file.size() as u64);
        let started = self.session.try_update(|s| s.begin_upload(&candidate));
        match started {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                log::warn!("Rejected file {:?}: {}", candidate.name, e);
                notify::alert(&e.to_string());
                return;
            }
            None => return,
        }
        log::info!("Uploading {} ({} bytes)", candidate.name, candidate.size);

        let session = self.session;
        spawn_local(async move {
            let outcome = api::upload_pdf(file).await;
            match &outcome {
                Ok(accepted) => log::info!(
                    "Conversation {} started: {}",
                    accepted.conversation_id,
                    accepted.message.as_deref().unwrap_or("-")
                ),
                Err(e) => log::error!("Upload error: {}", e),
            }
            match session.try_update(|s| s.finish_upload(outcome)) {
                Some(Ok(())) => on_ready(),
                Some(Err(alert)) => notify::alert(&alert),
                None => {}
            }
        });
    }

    /// Send the current question. Several questions may be in flight at once.
    pub fn send_question(&self) {
        let raw = self.question.get_untracked();
        let (ticket, request) = match self.session.try_update(|s| s.begin_ask(&raw)) {
            Some(Ok(Some(pending))) => pending,
            Some(Ok(None)) | None => return,
            Some(Err(e)) => {
                notify::alert(&e.to_string());
                return;
            }
        };
        self.question.set(String::new());
        log::debug!("Question #{} sent", ticket.seq);

        let session = self.session;
        spawn_local(async move {
            let outcome = api::ask(&request).await;
            if let Err(e) = &outcome {
                log::error!("Ask error: {}", e);
            }
            if let Some(Err(e)) = session.try_update(|s| s.finish_ask(ticket, outcome)) {
                log::warn!("{}", e);
            }
        });
    }

    /// One-off backend status probe for the header badge
    pub fn check_backend(&self) {
        let backend_online = self.backend_online;
        spawn_local(async move {
            let online = match api::check_health().await {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("Health check failed: {}", e);
                    false
                }
            };
            backend_online.set(Some(online));
        });
    }
}
