//! GitHub REST API access.

use super::keys::{parse_keys, PublicKey};
use crate::config;
use crate::error::{Error, Result};
use colored::Colorize;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};

/// URL of the public key listing for `github_user`.
pub fn keys_url(base_url: &str, github_user: &str) -> String {
    format!("{}/users/{github_user}/keys", base_url.trim_end_matches('/'))
}

/// Fetch the public SSH keys GitHub publishes for `github_user`.
///
/// Uses [`config::github_api_base_url`] and, when set, [`config::github_token`].
///
/// # Returns
/// * `Ok(Vec<PublicKey>)` - The keys, possibly none
/// * `Err` - On transport failure, a non-success status, or an unexpected body
pub async fn read_keys_from_gh(github_user: &str) -> Result<Vec<PublicKey>> {
    let url = keys_url(&config::github_api_base_url(), github_user);
    log::debug!("GET {url}", url = url.on_blue());

    let mut request = reqwest::Client::new()
        .get(&url)
        .header(ACCEPT, config::GITHUB_ACCEPT)
        .header("X-GitHub-Api-Version", config::GITHUB_API_VERSION)
        .header(USER_AGENT, config::USER_AGENT);
    if let Some(token) = config::github_token() {
        log::debug!("using GITHUB_TOKEN for authentication");
        request = request.header(AUTHORIZATION, format!("Bearer {token}"));
    }

    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        log::warn!(
            "{failed} GET {url} status={status}",
            failed = "failed".on_red(),
        );
        return Err(Error::Github {
            url,
            reason: format!("status {status}"),
        });
    }

    let keys = parse_keys(&url, &body)?;
    log::info!("got {} key(s) for GitHub user {github_user}", keys.len());
    Ok(keys)
}
