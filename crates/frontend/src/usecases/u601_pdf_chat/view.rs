//! PDF Chat - View Component

use super::drop_zone::DropZone;
use super::message_list::MessageList;
use super::session::ViewState;
use super::view_model::PdfChatVm;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_pdf_chat::PdfChat;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn PdfChatPage() -> impl IntoView {
    let vm = PdfChatVm::new();
    let view_state = vm.view_state();
    let question_ref = NodeRef::<leptos::html::Input>::new();

    // Probe the backend once on mount
    Effect::new(move |_| vm.check_backend());

    let handle_file = Callback::new(move |file: web_sys::File| {
        vm.upload(file, move || {
            request_animation_frame(move || {
                if let Some(input) = question_ref.get_untracked() {
                    let _ = input.focus();
                }
            });
        });
    });

    let handle_send = Callback::new(move |_: ()| vm.send_question());

    view! {
        <div class="pdf-chat" data-page=PdfChat::full_name()>
            <header class="pdf-chat__header">
                <h1>{PdfChat::display_name()}</h1>
                <span class="pdf-chat__subtitle">{PdfChat::description()}</span>
                {move || match vm.backend_online.get() {
                    None => view! { <span class="status status--unknown">"Checking backend..."</span> }.into_any(),
                    Some(true) => view! { <span class="status status--online">"Backend online"</span> }.into_any(),
                    Some(false) => view! { <span class="status status--offline">"Backend unreachable"</span> }.into_any(),
                }}
            </header>

            <section class="panel" class:hidden=move || view_state.get() != ViewState::Upload>
                <DropZone is_dragover=vm.is_dragover on_file=handle_file />
            </section>

            <section class="panel" class:hidden=move || view_state.get() != ViewState::Loading>
                <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                    <Spinner />
                    <span>"Processing PDF..."</span>
                </Flex>
            </section>

            <section class="panel panel--chat" class:hidden=move || view_state.get() != ViewState::Chat>
                <MessageList messages=vm.messages() />
                <Flex class="chat-input" gap=FlexGap::Small align=FlexAlign::Center>
                    <input
                        node_ref=question_ref
                        type="text"
                        class="chat-input__field"
                        placeholder="Ask a question about your PDF..."
                        prop:value=move || vm.question.get()
                        on:input=move |ev| vm.question.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.is_composing() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_send.run(())>
                        "Send"
                    </Button>
                </Flex>
            </section>
        </div>
    }
}
