//! Container descriptors.

use alloy_primitives::Address;

/// Descriptor of a stored container, as reported by the directory service.
///
/// Only ever constructed from a remote response; the client does not invent
/// or mutate descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Size quota in bytes.
    pub capacity: u64,
    /// Basic access-control value.
    pub basic_acl: u32,
    /// Server-generated salt.
    pub salt: Vec<u8>,
    /// Account address of the container owner.
    pub owner: Address,
    /// Placement policy, rendered to text by the server.
    pub placement: String,
}
