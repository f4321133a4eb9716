//! Classless static route (RFC 3442) model.

use super::ipv4::{parse_ipv4_addr, Ipv4};
use crate::error::{Error, Result};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// One destination network and the gateway that reaches it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ClasslessRoute {
    pub network: Ipv4,
    pub gateway: Ipv4Addr,
}

impl ClasslessRoute {
    /// Parse a `"<network>/<prefix> <gateway>"` spec.
    ///
    /// The two tokens are separated by exactly one space.
    pub fn new(route_spec: &str) -> Result<ClasslessRoute> {
        let invalid = || Error::InvalidRouteSpec(route_spec.to_string());

        let tokens: Vec<&str> = route_spec.split(' ').collect();
        let [network, gateway] = tokens.as_slice() else {
            return Err(invalid());
        };
        log::debug!("network: {network}, gateway: {gateway}");

        // Ipv4::new trims, the spec token must not need it
        if network.is_empty() || network.trim() != *network {
            return Err(invalid());
        }
        let network = Ipv4::new(network).map_err(|_| invalid())?;
        let gateway = parse_ipv4_addr(gateway).map_err(|_| invalid())?;

        Ok(ClasslessRoute { network, gateway })
    }

    /// Hex form of the route: prefix length, significant network octets,
    /// gateway octets.
    ///
    /// The prefix length carries no padding (`/8` is `8`, `/24` is `18`),
    /// every octet after it is two digits.
    pub fn encode(&self) -> String {
        let network: String = self
            .network
            .significant_octets()
            .iter()
            .map(|octet| format!("{octet:02X}"))
            .collect();
        format!("{:X}{network}{:08X}", self.network.mask, u32::from(self.gateway))
    }

    pub fn is_default(&self) -> bool {
        self.network.mask == 0
    }
}

impl FromStr for ClasslessRoute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ClasslessRoute::new(s)
    }
}

impl std::fmt::Display for ClasslessRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.network, self.gateway)
    }
}
