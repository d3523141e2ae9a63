use crate::domain::a001_pdf_chat::ui::PdfChatPage;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Resolve the service origin once and share it with the whole app.
    provide_context(AppConfig::load());

    view! {
        <ConfigProvider>
            <PdfChatPage />
        </ConfigProvider>
    }
}
