//! Opaque container identifiers.

use std::fmt;
use std::str::FromStr;

/// Length in bytes of a container identifier.
pub const CONTAINER_ID_LENGTH: usize = 32;

/// Server-assigned identifier of a stored container.
///
/// Identifiers are opaque: the client never derives one itself, it only
/// carries back what the directory service handed out. The canonical text
/// form is base-58 and round-trips losslessly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId([u8; CONTAINER_ID_LENGTH]);

/// Operator-supplied text (or wire bytes) that does not name a container id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid container id: expected a base-58 encoded 32-byte identifier")]
pub struct InvalidCidFormat;

impl ContainerId {
    /// Wraps raw identifier bytes.
    pub const fn from_bytes(bytes: [u8; CONTAINER_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parses an identifier from its wire representation.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, InvalidCidFormat> {
        let arr: [u8; CONTAINER_ID_LENGTH] = bytes.try_into().map_err(|_| InvalidCidFormat)?;
        Ok(Self(arr))
    }

    /// Raw identifier bytes, as sent on the wire.
    pub const fn as_bytes(&self) -> &[u8; CONTAINER_ID_LENGTH] {
        &self.0
    }
}

impl FromStr for ContainerId {
    type Err = InvalidCidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s).into_vec().map_err(|_| InvalidCidFormat)?;
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(&self.0).into_string())
    }
}

impl fmt::Debug for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContainerId({self})")
    }
}
