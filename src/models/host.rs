//! Host table entry model.

use crate::error::{Error, Result};
use mac_address::MacAddress;
use std::net::Ipv4Addr;

/// Parse a MAC address written with `:` or `-` separators, or as 12 bare
/// hex digits.
///
/// [`MacAddress`] prints upper case and colon separated, the form RouterOS
/// shows.
pub fn parse_mac_addr(text: &str) -> Result<MacAddress> {
    let text = text.trim();
    let invalid = || Error::InvalidMacAddress(text.to_string());

    let normalised = if text.len() == 12 && text.bytes().all(|b| b.is_ascii_hexdigit()) {
        text.as_bytes()
            .chunks(2)
            .map(|pair| String::from_utf8_lossy(pair).into_owned())
            .collect::<Vec<_>>()
            .join(":")
    } else {
        text.to_string()
    };

    normalised.parse::<MacAddress>().map_err(|_| invalid())
}

/// One row of the `hosts-definition` worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDefinition {
    pub hostname: String,
    pub domain: String,
    pub ip_address: Option<Ipv4Addr>,
    pub mac_address: Option<MacAddress>,
}

impl HostDefinition {
    /// Fully qualified name, `hostname.domain`, or just the hostname when
    /// the domain cell is empty.
    pub fn fqdn(&self) -> String {
        if self.domain.is_empty() {
            self.hostname.clone()
        } else {
            format!("{}.{}", self.hostname, self.domain)
        }
    }
}
