//! Domain models for the MikroTik configuration tools.
//!
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`ClasslessRoute`] - RFC 3442 route: destination network and gateway
//! - [`HostDefinition`] - host table rows

mod host;
mod ipv4;
mod route;

// Re-export public types
pub use host::{parse_mac_addr, HostDefinition};
pub use ipv4::{
    cut_addr, get_cidr_mask, parse_ipv4_addr, significant_bytes, Ipv4, MAX_LENGTH,
};
pub use route::ClasslessRoute;
