//! New-prefix derivation from a partition request.

use crate::error::{PlanError, Result};
use crate::models::{PartitionRequest, MAX_LENGTH};

/// Number of bits needed to represent `n` as an unsigned integer:
/// bit_length(0) = 0, bit_length(10) = 4.
fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

/// Compute the prefix length of the subnets a partition request produces.
///
/// A hosts request reserves `bit_length(n)` host bits, so the new prefix
/// is `32 - bit_length(n)`: requesting 2 hosts reserves 2 bits, and an
/// exact power of two reserves one bit more than its plain log2. A
/// subnets request is a direct bit borrow: the new prefix is
/// `base_prefix + n`. Both rules are integer bit arithmetic throughout.
///
/// A result outside 0-32 is an error; no clamping is applied here, and a
/// new prefix shorter than `base_prefix` is still returned (the
/// summarizer rejects that split as degenerate).
pub fn compute_new_prefix(base_prefix: u8, request: &PartitionRequest) -> Result<u8> {
    let new_prefix: i128 = match request {
        PartitionRequest::HostsPerSubnet(n) => {
            i128::from(MAX_LENGTH) - i128::from(bit_length(*n))
        }
        PartitionRequest::SubnetCount(n) => i128::from(base_prefix) + i128::from(*n),
    };

    if (0..=i128::from(MAX_LENGTH)).contains(&new_prefix) {
        Ok(new_prefix as u8)
    } else {
        Err(PlanError::InvalidPartition(
            i64::try_from(new_prefix).unwrap_or(i64::MAX),
        ))
    }
}
