//! PDF Chat - Upload panel

use super::model::{picked_files, HttpBackend};
use super::view_model::PdfChatVm;
use crate::shared::icons::icon;
use contracts::domain::a001_pdf_chat::aggregate::UploadedFile;
use contracts::domain::a001_pdf_chat::controller::upload_files;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn UploadPanel(vm: PdfChatVm, backend: HttpBackend) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let files = picked_files(&input);
        // Clear input so picking the same file again fires `change`
        input.set_value("");

        let backend = backend.clone();
        wasm_bindgen_futures::spawn_local(async move {
            upload_files(&vm, &backend, files).await;
        });
    };

    view! {
        <div style="display: flex; flex-direction: column;">
            <h2 style="font-size: 20px; font-weight: 600; margin-bottom: 16px;">"Upload PDFs"</h2>
            <input
                type="file"
                accept="application/pdf"
                multiple=true
                name="pdf"
                style="margin-bottom: 16px; width: 100%;"
                on:change=on_change
            />

            <Show when=move || vm.session.with(|s| s.is_uploading())>
                <Flex align=FlexAlign::Center style="gap: 8px; margin-bottom: 8px;">
                    <Spinner />
                    <span style="font-size: 14px; color: var(--colorNeutralForeground3);">"Uploading..."</span>
                </Flex>
            </Show>

            <ul style="font-size: 14px; list-style: none; margin: 0; padding: 0;">
                <For
                    each=move || {
                        vm.session.with(|s| s.files().iter().cloned().enumerate().collect::<Vec<_>>())
                    }
                    key=|(index, _)| *index
                    children=move |(_, file): (usize, UploadedFile)| {
                        view! {
                            <li
                                title=file.name.clone()
                                style="overflow: hidden; text-overflow: ellipsis; white-space: nowrap; padding: 2px 0;"
                            >
                                {icon("document")}
                                " "
                                {file.name.clone()}
                                <span style="color: var(--colorNeutralForeground3);">
                                    {format!(" ({})", file.display_size())}
                                </span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
