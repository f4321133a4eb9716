//! GitHub SSH key import.
//!
//! - [`client`] - fetching a user's public keys
//! - [`keys`] - decoding them and building `/user/ssh-keys/add` commands

mod client;
mod keys;

pub use client::{keys_url, read_keys_from_gh};
pub use keys::{add_key_command, parse_keys, render_commands, PublicKey, COMMANDS_BEGIN, COMMANDS_END};
