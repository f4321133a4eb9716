//! Option 43: UniFi controller address.

use crate::config::UNIFI_43_PREFIX;
use crate::error::Result;
use crate::models::parse_ipv4_addr;

/// Encode a controller address as the option 43 value.
///
/// The value is sub-option 1, length 4, then the address as 8 upper case
/// hex digits.
///
/// # Examples
/// ```
/// use mikrotik_config_tools::dhcp_options::encode_address;
/// assert_eq!(encode_address("192.168.0.1").unwrap(), "0x0104C0A80001");
/// ```
pub fn encode_address(payload: &str) -> Result<String> {
    let ip_addr = parse_ipv4_addr(payload).inspect_err(|_| {
        log::info!("invalid ip address: {payload}");
    })?;

    Ok(format!("{UNIFI_43_PREFIX}{:08X}", u32::from(ip_addr)))
}
