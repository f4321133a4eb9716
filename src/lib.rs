//! MikroTik RouterOS configuration generators.
//!
//! Small single-shot transforms from external data to router commands:
//! - [`dhcp_options`] - DHCP option 43 and 121 values
//! - [`github`] - `/user/ssh-keys/add` commands from GitHub public keys
//! - [`hosts`] - static DNS entries and DHCP leases from a host table

pub mod cli;
pub mod config;
pub mod dhcp_options;
pub mod error;
pub mod github;
pub mod hosts;
pub mod logging;
pub mod models;
pub mod output;

use cli::{Cli, Command, EncodeCommand};
pub use error::{Error, Result};
use std::path::Path;

/// Encode the requested DHCP option value.
pub fn encode(command: &EncodeCommand) -> Result<String> {
    let encoded = match command {
        EncodeCommand::Unifi43 { address } => dhcp_options::encode_address(address)?,
        EncodeCommand::ClasslessRoutes { route_spec } => dhcp_options::encode_routes(route_spec)?,
    };
    log::info!("encoded value: {encoded}");
    Ok(encoded)
}

/// Fetch `github_user`'s keys and build the commands adding them to `mikrotik_user`.
pub async fn ssh_key_commands(github_user: &str, mikrotik_user: &str) -> Result<Vec<String>> {
    let keys = github::read_keys_from_gh(github_user).await?;
    if keys.is_empty() {
        log::warn!("GitHub user {github_user} has no public SSH keys");
    }
    Ok(github::render_commands(mikrotik_user, &keys))
}

/// Read a host table and render it as `output_type` commands.
pub fn host_commands(file: &Path, output_type: hosts::OutputType) -> Result<Vec<String>> {
    let definition = hosts::read_hosts_definition_file(file)?;
    Ok(hosts::render(&definition, output_type))
}

/// Execute one parsed command line, writing its result.
pub async fn run(cli: Cli) -> Result<()> {
    log::debug!("{cli:#?}");

    match cli.command {
        Command::Encode(command) => {
            let encoded = encode(&command)?;
            output::write_lines(&[encoded], None)
        }
        Command::SshKeys {
            github_user,
            mikrotik_user,
        } => {
            let lines = ssh_key_commands(&github_user, &mikrotik_user).await?;
            output::write_lines(&lines, None)
        }
        Command::Hosts {
            file,
            output,
            output_type,
        } => {
            let lines = host_commands(&file, output_type)?;
            output::write_lines(&lines, output.as_deref())
        }
    }
}
