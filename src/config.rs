//! API endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API base URL
//! is fixed when the crate is built (`BLOG_API_URL`). The value is provided to
//! the component tree as a Leptos context by `app::App`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Remote REST API location used by the HTTP service layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build the config from the compile-time `BLOG_API_URL` variable.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("BLOG_API_URL"))
    }

    /// Build the config from an optional raw URL, falling back to
    /// [`DEFAULT_API_URL`] when absent or blank.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Join an API path (e.g. `/temas/3`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
