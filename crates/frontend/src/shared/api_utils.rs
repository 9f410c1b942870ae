//! API utilities for frontend-backend communication
//!
//! Resolves the backend base address and builds endpoint URLs.

/// Used when neither the page nor the build names a backend
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// `<meta name="pdf-chat-api-base" content="...">` overrides the backend address
pub const API_BASE_META: &str = "pdf-chat-api-base";

/// Picks the first non-blank candidate: page meta tag, then build-time
/// `PDF_CHAT_API_BASE`, then [`DEFAULT_API_BASE`]. Trailing slashes are dropped.
pub fn resolve_api_base(from_page: Option<String>, from_build: Option<&str>) -> String {
    let base = from_page
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| from_build.map(str::trim).filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/').to_string()
}

fn api_base_from_page() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", API_BASE_META);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Get the base URL for API requests
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/ask", api_base());
/// ```
pub fn api_base() -> String {
    resolve_api_base(api_base_from_page(), option_env!("PDF_CHAT_API_BASE"))
}

/// Build a full API URL from a path starting with "/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        assert_eq!(resolve_api_base(None, None), "http://localhost:8000");
        assert_eq!(resolve_api_base(Some("  ".to_string()), Some("")), DEFAULT_API_BASE);
    }

    #[test]
    fn test_page_overrides_build() {
        assert_eq!(
            resolve_api_base(Some("https://pdf.example.com/".to_string()), Some("http://build:9000")),
            "https://pdf.example.com"
        );
        assert_eq!(
            resolve_api_base(None, Some("http://build:9000//")),
            "http://build:9000"
        );
    }
}
