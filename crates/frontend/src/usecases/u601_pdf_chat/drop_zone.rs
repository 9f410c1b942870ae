//! Drop zone accepting one file by drag-and-drop or through the file dialog

use crate::shared::notify;
use contracts::usecases::u601_pdf_chat::file_check::NOT_PDF_MESSAGE;
use leptos::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};

#[component]
#[allow(non_snake_case)]
pub fn DropZone(is_dragover: RwSignal<bool>, on_file: Callback<web_sys::File>) -> impl IntoView {
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let open_dialog = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        is_dragover.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => on_file.run(file),
            None => notify::alert(NOT_PDF_MESSAGE),
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file.run(file);
        }
        // allow picking the same file again
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() { "drop-zone drop-zone--dragover" } else { "drop-zone" }
            }
            on:click=open_dialog
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                is_dragover.set(true);
            }
            on:dragleave=move |_| is_dragover.set(false)
            on:drop=on_drop
        >
            <div class="drop-zone__icon">"📄"</div>
            <p class="drop-zone__title">"Drop your PDF here"</p>
            <p class="drop-zone__hint">"or click to browse"</p>
            <input
                node_ref=file_input_ref
                type="file"
                accept="application/pdf,.pdf"
                style="display: none;"
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
