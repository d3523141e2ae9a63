//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Build a full API URL from the configured base and an endpoint path
///
/// # Arguments
/// * `base` - Service origin, e.g. "https://pdf.example.com" (may be empty
///   for same-origin requests)
/// * `path` - The endpoint path (should start with "/")
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("https://pdf.example.com", "/ask");
/// assert_eq!(url, "https://pdf.example.com/ask");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
