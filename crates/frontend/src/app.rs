use crate::usecases::u601_pdf_chat::PdfChatPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // A fresh chat session is created with the page and lives until unload.
    view! {
        <ConfigProvider>
            <PdfChatPage />
        </ConfigProvider>
    }
}
