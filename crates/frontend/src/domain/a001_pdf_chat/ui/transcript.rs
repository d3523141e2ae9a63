//! PDF Chat - Transcript

use super::view_model::PdfChatVm;
use contracts::domain::a001_pdf_chat::aggregate::ChatEntry;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn Transcript(vm: PdfChatVm) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view
    Effect::new(move |_| {
        vm.session.with(|s| s.transcript().len());
        if let Some(container) = container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div
            node_ref=container_ref
            style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; padding: 16px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
        >
            // Entries are append-only, so the index is a stable key.
            <For
                each=move || {
                    vm.session.with(|s| s.transcript().iter().cloned().enumerate().collect::<Vec<_>>())
                }
                key=|(index, _)| *index
                children=move |(_, entry): (usize, ChatEntry)| view! { <ChatBubble entry=entry /> }
            />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ChatBubble(entry: ChatEntry) -> impl IntoView {
    let style = if entry.is_user() {
        "align-self: flex-end; max-width: 28rem; padding: 8px; border-radius: 8px; background: var(--colorBrandBackground2); white-space: pre-wrap;"
    } else {
        "align-self: flex-start; max-width: 28rem; padding: 8px; border-radius: 8px; background: var(--colorPaletteGreenBackground1); white-space: pre-wrap;"
    };

    view! {
        <div class=format!("pdf-chat__entry pdf-chat__entry--{}", entry.author().as_str()) style=style>
            {entry.text().to_string()}
        </div>
    }
}
