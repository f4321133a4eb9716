//! Host table to RouterOS commands.
//!
//! - [`reader`] - parsing the `hosts-definition` table
//! - [`render`] - static DNS entries and DHCP leases

mod reader;
mod render;

pub use reader::{parse_hosts_definition, read_hosts_definition_file};
pub use render::{generate_dhcp_output, generate_dns_output, render, OutputType};
