//! Planner errors.

use thiserror::Error;

/// Errors reported by the subnet planner.
///
/// Every failure is terminal for the single computation; no partial plan is
/// returned. Retry, if any, is a caller decision.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Address fails the dotted-quad format check, or an octet does not fit
    /// an IPv4 address.
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    /// Partition kind is neither "hosts" nor "subnets".
    #[error("Invalid partition type: {0}")]
    InvalidPartitionKind(String),

    /// Count text is not a non-negative integer.
    #[error("Invalid number: {0}")]
    InvalidCount(String),

    /// Prefix length argument above 32.
    #[error("Invalid prefix length: {0} (must be 0-32)")]
    InvalidPrefixLength(u8),

    /// Partition request yields a prefix length outside 0-32.
    #[error("Partition yields prefix length {0}, outside 0-32")]
    InvalidPartition(i64),

    /// Split produces no subnets whose boundaries could be reported.
    #[error("Splitting {0} into /{1} subnets produces none")]
    DegenerateSplit(String, u8),

    /// Subnet address calculation left the 32-bit address space.
    #[error("Subnet address calculation overflowed")]
    AddressOverflow,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PlanError>;
