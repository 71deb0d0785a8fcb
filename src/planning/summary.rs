//! Subnet summary computation.
//!
//! Derives the reportable plan for a split: mask, host capacity, subnet
//! count, and the first/last two subnet boundaries. The count comes from
//! prefix arithmetic and the boundaries from indexed address math; the
//! subnet sequence is never materialized, so a /0 into /32 split (2^32
//! subnets) costs the same as a /24 into /26 one.

use crate::error::{PlanError, Result};
use crate::models::{mask_addr, num_hosts, Network, SubnetPlan, MAX_LENGTH};

/// Summarize the split of `network` into subnets of length `new_prefix`.
///
/// With `new_prefix` equal to the network's own prefix the split yields a
/// single subnet, reported in both boundary lists. A `new_prefix` shorter
/// than the network's prefix cannot produce a subnet inside it at all and
/// fails as a degenerate split.
///
/// The reported host count is the capacity of `network` itself, not of
/// each derived subnet (see [`SubnetPlan::num_hosts`]).
pub fn summarize(network: Network, new_prefix: u8) -> Result<SubnetPlan> {
    if new_prefix > MAX_LENGTH {
        return Err(PlanError::InvalidPrefixLength(new_prefix));
    }
    if new_prefix < network.prefix {
        return Err(PlanError::DegenerateSplit(network.to_string(), new_prefix));
    }

    // 2^(new_prefix - base_prefix), arithmetic only.
    let num_subnets = 1u64 << (new_prefix - network.prefix);

    let (first_two, last_two) = if num_subnets == 1 {
        let only = network.subnet(new_prefix, 0)?;
        (vec![only], vec![only])
    } else {
        (
            vec![
                network.subnet(new_prefix, 0)?,
                network.subnet(new_prefix, 1)?,
            ],
            vec![
                network.subnet(new_prefix, num_subnets - 2)?,
                network.subnet(new_prefix, num_subnets - 1)?,
            ],
        )
    };

    Ok(SubnetPlan {
        mask: mask_addr(new_prefix)?,
        new_prefix,
        num_hosts: num_hosts(network.prefix)?,
        num_subnets,
        first_two,
        last_two,
    })
}
