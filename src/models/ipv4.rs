//! IPv4 CIDR helpers used when summarizing subnet ranges.
//!
//! Subnet CIDRs travel through the pipeline as the verbatim strings the
//! provider reported. [`Ipv4`] is only parsed for display purposes.

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
const MAX_LENGTH: u8 = 32;

/// Addresses the provider reserves in every subnet (network, router, DNS,
/// future use and broadcast).
pub const RESERVED_ADDRESSES: u64 = 5;

/// Number of usable host addresses in a subnet of the given prefix length.
///
/// Subnets smaller than /28 cannot be created, so anything past that is an error.
pub fn num_usable_hosts(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > 28 {
        Err(format!("Subnet /{len} is smaller than the /28 minimum").into())
    } else {
        Ok((1u64 << (MAX_LENGTH - len)) - RESERVED_ADDRESSES)
    }
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| format!("Invalid address/mask {addr_cidr}"))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| format!("Invalid address {addr}"))?;
        let mask: u8 = mask.parse()?;
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Usable hosts in this subnet.
    pub fn usable_hosts(&self) -> Result<u64, Box<dyn Error>> {
        num_usable_hosts(self.mask)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
