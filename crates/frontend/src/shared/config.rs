//! Runtime configuration of the dashboard.

use leptos::prelude::*;

/// Settings shared by every screen, provided once as context by `App`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend origin without trailing slash, e.g. `https://simanja.example.go.id`.
    pub api_base_url: String,
    /// Rows per page for every paged list.
    pub page_size: usize,
    /// Quiet period before a search keystroke triggers a fetch.
    pub debounce_ms: u32,
    /// Upper bound for a single backend call.
    pub fetch_timeout_ms: u32,
}

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_DEBOUNCE_MS: u32 = 500;
pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 15_000;

impl AppConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }

    /// Base URL from `SIMANJA_API_BASE_URL` at build time, otherwise the page's own host on
    /// port 3000.
    pub fn from_environment() -> Self {
        match option_env!("SIMANJA_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url),
            _ => Self::with_base_url(&base_url_from_location()),
        }
    }
}

fn base_url_from_location() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Trims whitespace and trailing slashes so paths can be appended as `/api/...`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Config from context, falling back to the environment when none was provided.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_environment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(" https://api.simanja.id/ "),
            "https://api.simanja.id"
        );
        assert_eq!(normalize_base_url("http://localhost:3000//"), "http://localhost:3000");
        assert_eq!(normalize_base_url(""), "");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::with_base_url("http://localhost:3000");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.fetch_timeout_ms, 15_000);
    }
}
