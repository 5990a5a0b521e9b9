//! Application configuration.
//!
//! Build-time environment lookups and crate-wide constants. The browser has
//! no process environment, so values are captured with `option_env!` when
//! the WASM bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `API_BASE_URL` is unset or empty.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// `API_BASE_URL` captured from the build environment, if set.
pub fn configured_api_base_url() -> Option<&'static str> {
    option_env!("API_BASE_URL")
}

/// Resolve the effective base URL from an optional configured value.
///
/// Blank values fall back to [`DEFAULT_API_BASE_URL`]. Trailing slashes are
/// trimmed so endpoint paths can always start with `/`.
pub fn resolve_api_base_url(configured: Option<&str>) -> String {
    let base = configured
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL);
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
