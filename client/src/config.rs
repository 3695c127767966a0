//! Build-time client configuration.
//!
//! The backend base URL is fixed when the WASM bundle is compiled. Set
//! `ADVISOR_API_BASE_URL` in the build environment to point the client at a
//! different backend; otherwise it targets a local development server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `ADVISOR_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Base URL of the advisory backend, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("ADVISOR_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}
