//! IPv4 prefix arithmetic and the [`Network`] value type.
//!
//! Provides the address math the planner is built on:
//! - prefix length to subnet mask conversion
//! - host-bit clearing (network normalization)
//! - direct indexed subnet addressing for boundary reporting

use crate::error::{PlanError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum IPv4 prefix length (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_planner::models::prefix_mask;
/// assert_eq!(prefix_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_mask(prefix: u8) -> Result<u32> {
    if prefix > MAX_LENGTH {
        Err(PlanError::InvalidPrefixLength(prefix))
    } else {
        let right_len = MAX_LENGTH - prefix;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Dotted-quad form of a prefix length (e.g. 26 -> 255.255.255.192).
pub fn mask_addr(prefix: u8) -> Result<Ipv4Addr> {
    Ok(Ipv4Addr::from(prefix_mask(prefix)?))
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr> {
    if prefix > MAX_LENGTH {
        Err(PlanError::InvalidPrefixLength(prefix))
    } else {
        let right_len = MAX_LENGTH - prefix;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Usable host count of a network of the given prefix length: total
/// addresses minus network and broadcast.
///
/// Not clamped, so /31 reports 0 and /32 reports -1.
pub fn num_hosts(prefix: u8) -> Result<i64> {
    if prefix > MAX_LENGTH {
        Err(PlanError::InvalidPrefixLength(prefix))
    } else {
        Ok((1i64 << (MAX_LENGTH - prefix)) - 2)
    }
}

/// Base address of subnet `index` of length `prefix`, counting up from
/// `base`.
///
/// Computed as `base + index * 2^(32 - prefix)` in 64-bit arithmetic, so
/// the far end of a split with billions of subnets is reached without
/// stepping through them. An index whose subnet would start past
/// 255.255.255.255 is an error.
pub fn subnet_at(base: Ipv4Addr, prefix: u8, index: u64) -> Result<Ipv4Addr> {
    if prefix > MAX_LENGTH {
        return Err(PlanError::InvalidPrefixLength(prefix));
    }
    let block = 1u64 << (MAX_LENGTH - prefix);
    let bits = index
        .checked_mul(block)
        .and_then(|offset| offset.checked_add(u32::from(base) as u64))
        .ok_or(PlanError::AddressOverflow)?;

    u32::try_from(bits)
        .map(Ipv4Addr::from)
        .map_err(|_| PlanError::AddressOverflow)
}

/// IPv4 network: base address plus prefix length.
///
/// The base address always has its host bits cleared; constructors
/// normalize a member address by masking rather than rejecting it.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Network {
    /// Base address of the network (host bits zero).
    pub addr: Ipv4Addr,
    /// Prefix length (0-32).
    pub prefix: u8,
}

impl Network {
    /// Create a normalized network from any member address.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Network> {
        Ok(Network {
            addr: network_addr(addr, prefix)?,
            prefix,
        })
    }

    /// Create a normalized network from a CIDR string (e.g. "10.0.0.0/24").
    pub fn from_cidr(cidr: &str) -> Result<Network> {
        let cidr = cidr.trim();
        let parts: Vec<&str> = cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(PlanError::InvalidAddress(cidr.to_string()));
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| PlanError::InvalidAddress(parts[0].to_string()))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| PlanError::InvalidAddress(cidr.to_string()))?;

        Network::new(addr, prefix)
    }

    /// Subnet `index` of this network when it is split into /`new_prefix`
    /// pieces.
    pub fn subnet(&self, new_prefix: u8, index: u64) -> Result<Network> {
        Network::new(subnet_at(self.addr, new_prefix, index)?, new_prefix)
    }

    /// Subnet mask of this network in dotted-quad form.
    pub fn mask(&self) -> Result<Ipv4Addr> {
        mask_addr(self.prefix)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_cidr(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Network) -> bool {
        self.addr == other.addr && self.prefix == other.prefix
    }
}

impl PartialOrd for Network {
    fn partial_cmp(&self, other: &Network) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
