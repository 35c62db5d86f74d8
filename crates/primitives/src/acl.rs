//! Basic access-control values.

use std::fmt;
use std::str::FromStr;

/// Well-known basic ACL granting full public access.
pub const PUBLIC_BASIC_ACL: u32 = 0x1FFF_FFFF;

/// Well-known basic ACL restricting all access to the owner.
pub const PRIVATE_BASIC_ACL: u32 = 0x1888_8888;

/// Well-known basic ACL allowing public reads with owner-only writes.
pub const READONLY_BASIC_ACL: u32 = 0x1FFF_88FF;

/// Basic access policy attached to a container at creation time.
///
/// Resolved once at the command boundary. The numeric value gates access for
/// every later operation on the container, so resolution must yield the same
/// value for the same input across processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicAcl {
    /// Full public access.
    Public,
    /// Owner-only access.
    Private,
    /// Public reads, owner-only writes.
    ReadOnly,
    /// Any other policy, supplied as a raw hex literal.
    Custom(u32),
}

/// A token that is neither a reserved ACL name nor a hex literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid basic ACL literal: {0:?}")]
pub struct InvalidAclLiteral(pub String);

impl BasicAcl {
    /// The numeric access-control value submitted to the remote service.
    pub const fn value(&self) -> u32 {
        match self {
            Self::Public => PUBLIC_BASIC_ACL,
            Self::Private => PRIVATE_BASIC_ACL,
            Self::ReadOnly => READONLY_BASIC_ACL,
            Self::Custom(value) => *value,
        }
    }
}

impl FromStr for BasicAcl {
    type Err = InvalidAclLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "readonly" => Ok(Self::ReadOnly),
            other => u32::from_str_radix(other, 16)
                .map(Self::Custom)
                .map_err(|_| InvalidAclLiteral(other.to_owned())),
        }
    }
}

impl fmt::Display for BasicAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.value())
    }
}
