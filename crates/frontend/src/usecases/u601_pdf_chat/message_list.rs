use super::session::Message;
use leptos::prelude::*;

fn message_class(msg: &Message) -> String {
    let mut class = format!("message message--{}", msg.role.as_str());
    if msg.temporary {
        class.push_str(" message--temporary");
    }
    class
}

/// Scrolling list of chat messages, kept pinned to the newest one
#[component]
#[allow(non_snake_case)]
pub fn MessageList(messages: Signal<Vec<Message>>) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        // re-run on every append or placeholder swap
        messages.with(|m| (m.len(), m.last().map(|msg| msg.id)));
        if let Some(container) = container_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="messages" node_ref=container_ref>
            <For
                each=move || messages.get()
                key=|msg| msg.id
                let:msg
            >
                <div class=message_class(&msg)>
                    // plain text node, never parsed as markup
                    <div class="message__text">{msg.text.clone()}</div>
                    <div class="message__meta">
                        {msg.created_at.with_timezone(&chrono::Local).format("%H:%M").to_string()}
                    </div>
                </div>
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_pdf_chat::session::ChatSession;
    use contracts::usecases::u601_pdf_chat::{ConversationId, PdfCandidate, UploadAccepted};

    #[test]
    fn test_message_class() {
        let mut session = ChatSession::new();
        session
            .begin_upload(&PdfCandidate::new("doc.pdf", "application/pdf", 1))
            .unwrap();
        session
            .finish_upload(Ok(UploadAccepted {
                conversation_id: ConversationId::new("c1"),
                message: None,
            }))
            .unwrap();
        session.begin_ask("hi").unwrap();

        let classes: Vec<_> = session.messages().iter().map(message_class).collect();
        assert_eq!(
            classes,
            vec![
                "message message--assistant",
                "message message--user",
                "message message--assistant message--temporary",
            ]
        );
    }
}
