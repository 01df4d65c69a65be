//! API URL helpers
//!
//! The console is served from the same origin as its API, so URLs are
//! built from the current window location.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "https://console.example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,no_run
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/api/v2/settings/github-enterprise/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
