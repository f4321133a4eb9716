//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for networks written as `a.b.c.d/len`, along with the
//! byte-count rule used by classless static routes.

use crate::error::{Error, Result};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] give the full mask.
///
/// # Examples
/// ```
/// use mikrotik_config_tools::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    ((all_bits >> right_len) << right_len) as u32
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len))
}

/// Number of leading network octets needed to carry a prefix of `len` bits.
///
/// Defined for every `u8`; lengths past 32 need the whole address.
///
/// # Examples
/// ```
/// use mikrotik_config_tools::models::significant_bytes;
/// assert_eq!(significant_bytes(0), 0);
/// assert_eq!(significant_bytes(9), 2);
/// assert_eq!(significant_bytes(32), 4);
/// ```
pub const fn significant_bytes(len: u8) -> usize {
    match len {
        0 => 0,
        1..=8 => 1,
        9..=16 => 2,
        17..=24 => 3,
        _ => 4,
    }
}

/// Parse a dotted-quad IPv4 address, reporting the text on failure.
pub fn parse_ipv4_addr(text: &str) -> Result<Ipv4Addr> {
    Ipv4Addr::from_str(text).map_err(|_| Error::InvalidAddress(text.to_string()))
}

/// IPv4 address with CIDR notation support.
///
/// The address is kept as written: `10.1.2.3/8` stays `10.1.2.3/8`, see
/// [`Ipv4::is_canonical`].
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// A bare address is a host route (`/32`).
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let addr_cidr = addr_cidr.trim();
        let invalid = || Error::InvalidAddress(addr_cidr.to_string());

        let parts: Vec<&str> = addr_cidr.split('/').collect();
        let (addr, mask) = match parts.as_slice() {
            [addr] => (*addr, MAX_LENGTH),
            [addr, mask] => {
                // u8::from_str takes a leading '+', a prefix length must not
                if mask.is_empty() || !mask.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                (*addr, mask.parse::<u8>().map_err(|_| invalid())?)
            }
            _ => return Err(invalid()),
        };
        if mask > MAX_LENGTH {
            return Err(invalid());
        }
        let addr = Ipv4Addr::from_str(addr).map_err(|_| invalid())?;

        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
    }

    /// True when no host bits are set past the prefix length.
    pub fn is_canonical(&self) -> bool {
        self.lo() == self.addr
    }

    /// The leading octets of the address that a prefix of this length needs.
    pub fn significant_octets(&self) -> Vec<u8> {
        self.addr.octets()[..significant_bytes(self.mask)].to_vec()
    }
}

impl FromStr for Ipv4 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0), 0x00000000);
        assert_eq!(get_cidr_mask(8), 0xFF000000);
        assert_eq!(get_cidr_mask(16), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32), 0xFFFFFFFF);
        assert_eq!(get_cidr_mask(33), 0xFFFFFFFF);
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32), Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(cut_addr(ip, 0), Ipv4Addr::UNSPECIFIED);
    }

    #[test]
    fn test_significant_bytes_boundaries() {
        assert_eq!(significant_bytes(0), 0);
        assert_eq!(significant_bytes(8), 1);
        assert_eq!(significant_bytes(9), 2);
        assert_eq!(significant_bytes(16), 2);
        assert_eq!(significant_bytes(17), 3);
        assert_eq!(significant_bytes(24), 3);
        assert_eq!(significant_bytes(25), 4);
        assert_eq!(significant_bytes(32), 4);
    }

    #[test]
    fn test_significant_bytes_total() {
        for len in 1..=MAX_LENGTH {
            let bytes = significant_bytes(len);
            assert!(bytes * 8 >= len as usize, "/{len} needs more than {bytes} bytes");
            assert!((bytes - 1) * 8 < len as usize, "/{len} wastes a byte");
        }
    }

    #[test]
    fn test_ipv4_new() {
        let net = Ipv4::new("10.0.0.0/8").unwrap();
        assert_eq!(net.addr, Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(net.mask, 8);
        assert_eq!(net.to_string(), "10.0.0.0/8");

        let host = Ipv4::new("192.168.0.7").unwrap();
        assert_eq!(host.mask, 32);

        assert_eq!(Ipv4::new(" 172.16.0.0/12 ").unwrap().mask, 12);
    }

    #[test]
    fn test_ipv4_new_invalid() {
        for bad in [
            "",
            "10.0.0.0/",
            "10.0.0.0/33",
            "10.0.0.0/+8",
            "10.0.0.0/8/8",
            "10.0.0/8",
            "256.0.0.0/8",
            "010.0.0.0/8",
            "ten/8",
        ] {
            match Ipv4::new(bad) {
                Err(Error::InvalidAddress(text)) => assert_eq!(text, bad.trim()),
                other => panic!("expected InvalidAddress for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_ipv4_keeps_host_bits() {
        let net: Ipv4 = "192.168.1.77/24".parse().unwrap();
        assert_eq!(net.addr, Ipv4Addr::new(192, 168, 1, 77));
        assert_eq!(net.lo(), Ipv4Addr::new(192, 168, 1, 0));
        assert!(!net.is_canonical());
        assert_eq!(net.significant_octets(), vec![192, 168, 1]);

        assert!(Ipv4::new("0.0.0.0/0").unwrap().is_canonical());
        assert!(Ipv4::new("10.1.0.0/16").unwrap().is_canonical());
    }

    #[test]
    fn test_significant_octets() {
        assert!(Ipv4::new("0.0.0.0/0").unwrap().significant_octets().is_empty());
        assert_eq!(Ipv4::new("10.0.0.0/8").unwrap().significant_octets(), vec![10]);
        assert_eq!(
            Ipv4::new("10.229.0.128/25").unwrap().significant_octets(),
            vec![10, 229, 0, 128]
        );
    }

    #[test]
    fn test_parse_ipv4_addr() {
        assert_eq!(
            parse_ipv4_addr("192.168.0.1").unwrap(),
            Ipv4Addr::new(192, 168, 0, 1)
        );
        assert!(matches!(
            parse_ipv4_addr("999.1.1.1"),
            Err(Error::InvalidAddress(text)) if text == "999.1.1.1"
        ));
        assert!(parse_ipv4_addr("1.2.3").is_err());
        assert!(parse_ipv4_addr(" 1.2.3.4").is_err());
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 >= ip3);
    }
}
