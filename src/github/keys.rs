//! GitHub public key listing and the RouterOS commands built from it.

use crate::error::{Error, Result};
use serde::Deserialize;

pub const COMMANDS_BEGIN: &str = "# beginning of the Mikrotik commands";
pub const COMMANDS_END: &str = "# end of the Mikrotik commands";

/// One entry of `GET /users/{user}/keys`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub id: u64,
    pub key: String,
}

/// Decode the key listing, naming the JSON path of the first bad field.
pub fn parse_keys(url: &str, body: &str) -> Result<Vec<PublicKey>> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::debug!("RESPONSE START:\n\n{body}\n\nRESPONSE END\n");
        Error::Github {
            url: url.to_string(),
            reason: format!("path={} error={}", e.path(), e),
        }
    })
}

/// `/user/ssh-keys/add` for one key.
///
/// Double quotes inside the key (only possible in its comment part) are
/// escaped for the RouterOS string.
pub fn add_key_command(mikrotik_user: &str, key: &str) -> String {
    let key = key.trim().replace('\\', "\\\\").replace('"', "\\\"");
    format!("/user/ssh-keys/add user={mikrotik_user} key=\"{key}\"")
}

/// The full command block for a user, framed by begin and end comments.
pub fn render_commands(mikrotik_user: &str, keys: &[PublicKey]) -> Vec<String> {
    let mut lines = Vec::with_capacity(keys.len() + 2);
    lines.push(COMMANDS_BEGIN.to_string());
    lines.extend(keys.iter().map(|k| add_key_command(mikrotik_user, &k.key)));
    lines.push(COMMANDS_END.to_string());
    lines
}
