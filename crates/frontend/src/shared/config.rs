//! Runtime configuration of the client
//!
//! The service origin is never hard-coded. It is resolved, first match wins:
//! 1. `<meta name="pdf-chat-api-base" content="...">` in the host page
//! 2. `PDF_CHAT_API_BASE` at build time
//! 3. the origin the page was served from

pub const API_BASE_META: &str = "pdf-chat-api-base";

const BUILD_API_BASE: Option<&str> = option_env!("PDF_CHAT_API_BASE");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    pub fn load() -> Self {
        let api_base = resolve_api_base(meta_api_base(), BUILD_API_BASE, page_origin());
        log::info!("Using document service at: {}", api_base);
        Self { api_base }
    }
}

/// Pick the first non-blank candidate and strip trailing slashes.
///
/// Returns an empty string when nothing is configured, which makes every
/// request relative to the current page.
pub fn resolve_api_base(
    meta: Option<String>,
    build_env: Option<&str>,
    origin: Option<String>,
) -> String {
    [meta.as_deref(), build_env, origin.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .map(|candidate| candidate.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

fn meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
