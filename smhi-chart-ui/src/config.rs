//! Where the backend lives.
//!
//! The app is served by the same host that proxies the SMHI API, so the base
//! URL is the page origin plus `/api`. Outside a browser page (or on an opaque
//! origin) the local development backend is used.

use log::warn;
use smhi_api::DEFAULT_API_URL;

/// Base URL for a page served from `origin`.
pub fn api_base_for_origin(origin: &str) -> Option<String> {
    let origin = origin.trim_end_matches('/');
    if origin.is_empty() || origin == "null" {
        return None;
    }
    Some(format!("{}/api", origin))
}

/// Base URL for the current page.
pub fn browser_api_base() -> String {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    match origin.as_deref().and_then(api_base_for_origin) {
        Some(base) => base,
        None => {
            warn!(
                "Could not determine page origin ({:?}), using {}",
                origin, DEFAULT_API_URL
            );
            DEFAULT_API_URL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_for_origin() {
        assert_eq!(
            api_base_for_origin("https://example.se"),
            Some("https://example.se/api".to_string())
        );
        assert_eq!(
            api_base_for_origin("http://localhost:8080/"),
            Some("http://localhost:8080/api".to_string())
        );
        assert_eq!(api_base_for_origin("null"), None);
        assert_eq!(api_base_for_origin(""), None);
    }
}
