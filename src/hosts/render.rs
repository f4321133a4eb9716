//! RouterOS commands for static DNS entries and DHCP leases.

use crate::models::HostDefinition;
use clap::ValueEnum;

/// What to generate from the host table.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputType {
    /// `/ip dns static` entries
    Dns,
    /// `/ip dhcp-server lease` static leases
    Dhcp,
}

/// Render the command block for `output_type`.
pub fn render(definition: &[HostDefinition], output_type: OutputType) -> Vec<String> {
    match output_type {
        OutputType::Dns => generate_dns_output(definition),
        OutputType::Dhcp => generate_dhcp_output(definition),
    }
}

/// One `add` per host that has an address.
pub fn generate_dns_output(definition: &[HostDefinition]) -> Vec<String> {
    let mut lines = vec!["/ip dns static".to_string()];
    for item in definition {
        let Some(ip_address) = item.ip_address else {
            log::warn!("skipping {}: no ip-address", item.fqdn());
            continue;
        };
        lines.push(format!("add address={ip_address} name={}", item.fqdn()));
    }
    lines
}

/// One static lease per host that has both an address and a MAC.
pub fn generate_dhcp_output(definition: &[HostDefinition]) -> Vec<String> {
    let mut lines = vec!["/ip dhcp-server lease".to_string()];
    for item in definition {
        match (item.ip_address, item.mac_address) {
            (Some(ip_address), Some(mac_address)) => lines.push(format!(
                "add address={ip_address} mac-address={mac_address} comment={}",
                item.fqdn()
            )),
            _ => log::warn!("skipping {}: dhcp lease needs ip-address and mac-address", item.fqdn()),
        }
    }
    lines
}
