//! DHCP option value encoders for `/ip dhcp-server option`.
//!
//! - [`unifi`] - option 43, UniFi controller address
//! - [`classless_routes`] - option 121, classless static routes

mod classless_routes;
mod unifi;

pub use classless_routes::{encode_parsed_routes, encode_routes, parse_routes};
pub use unifi::encode_address;
