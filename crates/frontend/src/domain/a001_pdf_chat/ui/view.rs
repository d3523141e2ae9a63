//! PDF Chat - View Component

use super::model::HttpBackend;
use super::transcript::Transcript;
use super::upload_panel::UploadPanel;
use super::view_model::{KeyPress, PdfChatVm};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use contracts::domain::a001_pdf_chat::controller::ask_question;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn PdfChatPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::load);
    let backend = HttpBackend::new(config.api_base);
    let vm = PdfChatVm::new();

    // Ask handler - using Callback so both Enter and the button share it
    let handle_ask = Callback::new({
        let backend = backend.clone();
        move |_| {
            let backend = backend.clone();
            wasm_bindgen_futures::spawn_local(async move {
                ask_question(&vm, &backend).await;
            });
        }
    });

    view! {
        <div style="min-height: 100vh; width: 100%; display: flex; flex-wrap: wrap; font-family: sans-serif;">
            // Left: Upload
            <div style="flex: 1 1 280px; padding: 16px; background: var(--colorNeutralBackground2); border-right: 1px solid var(--colorNeutralStroke2);">
                <UploadPanel vm=vm backend=backend />
            </div>

            // Right: Chat
            <div style="flex: 2 1 480px; padding: 16px; display: flex; flex-direction: column; height: 100vh; box-sizing: border-box;">
                <h2 style="font-size: 20px; font-weight: 600; margin-bottom: 16px;">"Ask Questions"</h2>

                <Transcript vm=vm />

                <Flex style="margin-top: 16px; gap: 8px; align-items: flex-end;">
                    <textarea
                        rows=2
                        placeholder="Type your question..."
                        style="flex: 1; padding: 8px; border: 1px solid var(--colorNeutralStroke1); border-radius: 4px; resize: none; font: inherit;"
                        prop:value=move || vm.session.with(|s| s.pending_question().to_string())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            vm.session.update(|s| s.set_pending_question(text));
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            // Shift+Enter falls through to the default newline
                            if KeyPress::from_event(&ev).is_submit() {
                                ev.prevent_default();
                                handle_ask.run(());
                            }
                        }
                    ></textarea>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_ask.run(())
                    >
                        {icon("send")}
                        " Ask"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
