//! Constants and environment driven settings.
//!
//! `main` loads a `.env` file with `dotenv` before anything reads the
//! environment, so every override below may also live there.

use std::env;

/// Prefix of the option 43 value: sub-option 1, length 4.
pub const UNIFI_43_PREFIX: &str = "0x0104";

/// Prefix of the option 121 value.
pub const CLASSLESS_ROUTES_PREFIX: &str = "0x0";

/// Default GitHub REST API endpoint, overridden by `GITHUB_API_BASE_URL`.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Column headers of the `hosts-definition` worksheet, in order.
pub const HOSTS_DEFINITION_HEADERS: [&str; 4] = ["hostname", "domain", "ip-address", "mac-address"];

/// Base URL of the GitHub API, without a trailing slash.
pub fn github_api_base_url() -> String {
    env::var("GITHUB_API_BASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .unwrap_or_else(|| GITHUB_API_BASE_URL.to_string())
}

/// Optional token for authenticated (higher rate limit) GitHub requests.
pub fn github_token() -> Option<String> {
    env::var("GITHUB_TOKEN")
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
