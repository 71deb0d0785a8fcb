//! Planner request and result models.

use super::Network;
use crate::error::{PlanError, Result};
use serde::Serialize;
use std::net::Ipv4Addr;

/// How to partition a base network.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PartitionRequest {
    /// Reserve enough host bits to represent this many hosts in each
    /// subnet (bit-length of the count, see the partition planner).
    HostsPerSubnet(u64),
    /// Borrow this many extra prefix bits. The number is a prefix-length
    /// delta, not a target subnet count to solve for.
    SubnetCount(u64),
}

impl PartitionRequest {
    /// Build a request from the raw kind string.
    ///
    /// Only the exact strings "hosts" and "subnets" are accepted.
    pub fn from_kind(kind: &str, count: u64) -> Result<PartitionRequest> {
        match kind {
            "hosts" => Ok(PartitionRequest::HostsPerSubnet(count)),
            "subnets" => Ok(PartitionRequest::SubnetCount(count)),
            _ => Err(PlanError::InvalidPartitionKind(kind.to_string())),
        }
    }
}

/// Result of one subnet planning computation.
///
/// All fields are plain values; a plan is created fresh per computation and
/// never mutated.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetPlan {
    /// Subnet mask of the split, in dotted-quad form.
    pub mask: Ipv4Addr,
    /// Prefix length of each subnet produced by the split.
    pub new_prefix: u8,
    /// Usable host count of the base network: its address count minus
    /// network and broadcast. This reports the base network's capacity,
    /// not the capacity of each derived subnet; 0 for a /31 base and -1
    /// for a /32 base.
    pub num_hosts: i64,
    /// Number of subnets the split produces.
    pub num_subnets: u64,
    /// The first two subnets of the split, lowest base address first
    /// (a single entry when the split yields one subnet).
    pub first_two: Vec<Network>,
    /// The last two subnets of the split, lowest base address first
    /// (a single entry when the split yields one subnet).
    pub last_two: Vec<Network>,
}
