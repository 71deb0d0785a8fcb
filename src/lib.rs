//! Subnet planning for IPv4 networks.
//!
//! Given a base address, an optional CIDR, and a partitioning request
//! (hosts per subnet, or a subnet-count bit borrow), computes the subnet
//! mask, host capacity, subnet count, and the boundary subnets of the
//! split. The computation is pure and synchronous; callers supply raw
//! strings and receive a [`SubnetPlan`] or a typed [`PlanError`].
//!
//! # Examples
//! ```
//! use subnet_planner::plan;
//!
//! let plan = plan("192.168.1.0", Some("24"), "subnets", "2").unwrap();
//! assert_eq!(plan.num_subnets, 4);
//! assert_eq!(plan.mask.to_string(), "255.255.255.192");
//! ```

mod error;
pub mod models;
pub mod output;
pub mod planning;

pub use error::{PlanError, Result};
pub use models::{Network, PartitionRequest, SubnetPlan};
pub use planning::{is_valid_address, resolve_prefix};

use std::net::Ipv4Addr;

/// Compute a full subnet plan from raw request strings.
///
/// This is the linear pipeline behind the interactive front-end:
/// format-check the address, parse the count and partition kind, resolve
/// the effective prefix, normalize the base network, derive the new
/// prefix, and summarize the split. Pure function over its inputs;
/// identical calls yield identical plans.
///
/// An address that passes the loose format check but is not a real IPv4
/// address (an octet above 255) fails here, when the network is built.
pub fn plan(
    address: &str,
    explicit_cidr: Option<&str>,
    partition_kind: &str,
    count_text: &str,
) -> Result<SubnetPlan> {
    log::debug!("plan({address}, {explicit_cidr:?}, {partition_kind}, {count_text})");

    if !planning::is_valid_address(address) {
        return Err(PlanError::InvalidAddress(address.to_string()));
    }
    let count = planning::parse_count(count_text)?;
    let request = PartitionRequest::from_kind(partition_kind, count)?;

    let prefix = planning::resolve_prefix(explicit_cidr, address);
    let base_addr: Ipv4Addr = address
        .parse()
        .map_err(|_| PlanError::InvalidAddress(address.to_string()))?;
    let network = Network::new(base_addr, prefix)?;

    let new_prefix = planning::compute_new_prefix(network.prefix, &request)?;
    planning::summarize(network, new_prefix)
}
