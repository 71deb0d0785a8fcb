//! Domain models for the subnet planner.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Network`] - IPv4 network (base address plus prefix length)
//! - [`PartitionRequest`] - how a base network should be split
//! - [`SubnetPlan`] - the computed result

mod ipv4;
mod plan;

// Re-export public types
pub use ipv4::{
    mask_addr, network_addr, num_hosts, prefix_mask, subnet_at, Network, MAX_LENGTH,
};
pub use plan::{PartitionRequest, SubnetPlan};
