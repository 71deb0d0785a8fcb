//! Planning pipeline stages.
//!
//! The planner runs as a linear pipeline over value inputs:
//! - address format and count checks
//! - effective prefix resolution
//! - new prefix derivation
//! - plan computation

mod partition;
mod prefix;
mod summary;
mod validate;

// Re-export public functions
pub use partition::compute_new_prefix;
pub use prefix::{class_default, is_valid_cidr, resolve_prefix};
pub use summary::summarize;
pub use validate::{is_valid_address, parse_count};
