//! Command line arguments.

use crate::hosts::OutputType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mikrotik-config-tools")]
#[command(version, about = "Generate MikroTik RouterOS configuration commands", long_about = None)]
pub struct Cli {
    /// talkative mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a DHCP option value
    #[command(subcommand)]
    Encode(EncodeCommand),

    /// Print commands adding a GitHub user's SSH keys to a router user
    SshKeys {
        /// GitHub user to read SSH keys for
        github_user: String,
        /// MikroTik user to add SSH keys for
        mikrotik_user: String,
    },

    /// Print static DNS entries or DHCP leases from a host table
    Hosts {
        /// CSV export of the hosts-definition worksheet
        #[arg(short, long)]
        file: PathBuf,
        /// output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short = 't', long, value_enum)]
        output_type: OutputType,
    },
}

#[derive(Subcommand, Debug)]
pub enum EncodeCommand {
    /// Option 43 for Unifi Controller address
    #[command(name = "unifi_43")]
    Unifi43 {
        /// address to encode
        address: String,
    },

    /// Option 121 for classless static routes
    #[command(name = "classless_routes")]
    ClasslessRoutes {
        /// route specification to encode in format "a.b.c.d/e 1.2.3.4",
        /// first spec MUST be for default route in format "0.0.0.0/0 1.2.3.4"
        #[arg(required = true, num_args = 1..)]
        route_spec: Vec<String>,
    },
}
