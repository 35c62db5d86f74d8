//! Signed request envelopes.

use alloy_primitives::{Address, B256, Signature, keccak256};
use silo_identity::{Identity, IdentityError};
use silo_primitives::ContainerId;

/// Forwarding budget sent with every request: the serving node plus one
/// relayed hop.
pub const SINGLE_FORWARDED_TTL: u32 = 2;

/// Logical request payload bound by an envelope signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    /// Liveness probe.
    Health,
    /// Container creation request.
    Put { capacity: u64, basic_acl: u32 },
    /// Descriptor read-back.
    Get { container_id: ContainerId },
    /// Owned-container listing.
    List,
}

impl Payload {
    /// Canonical byte form covered by the signature.
    ///
    /// The leading tag keeps signatures from being replayed across
    /// operation kinds.
    fn signing_bytes(&self) -> Vec<u8> {
        match self {
            Self::Health => vec![0x00],
            Self::Put { capacity, basic_acl } => {
                let mut buf = vec![0x01];
                buf.extend_from_slice(&capacity.to_be_bytes());
                buf.extend_from_slice(&basic_acl.to_be_bytes());
                buf
            }
            Self::Get { container_id } => {
                let mut buf = vec![0x02];
                buf.extend_from_slice(container_id.as_bytes());
                buf
            }
            Self::List => vec![0x03],
        }
    }
}

/// Transport-ready request metadata: forwarding budget, signer account, and
/// a signature binding the payload to both.
///
/// Built fresh for every call; envelopes are never reused.
#[derive(Debug, Clone)]
pub struct Envelope {
    ttl: u32,
    account: Address,
    signature: Signature,
    debug: bool,
}

impl Envelope {
    /// Signs `payload` with `identity` under the given forwarding budget.
    pub fn sign(
        payload: Payload,
        identity: &Identity,
        ttl: u32,
        debug: bool,
    ) -> Result<Self, IdentityError> {
        let signature = identity.sign_digest(digest(payload, ttl))?;
        Ok(Self {
            ttl,
            account: identity.address(),
            signature,
            debug,
        })
    }

    /// Forwarding budget carried by this envelope.
    pub const fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Account address of the signer.
    pub const fn account(&self) -> Address {
        self.account
    }

    /// Recoverable signature over the payload digest.
    pub const fn signature(&self) -> Signature {
        self.signature
    }

    /// Whether the server should echo diagnostic detail.
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Checks that this envelope signs `payload` for its own account.
    pub fn verifies(&self, payload: Payload) -> bool {
        self.signature
            .recover_address_from_prehash(&digest(payload, self.ttl))
            .is_ok_and(|recovered| recovered == self.account)
    }
}

/// Digest binding the payload bytes and the forwarding budget.
fn digest(payload: Payload, ttl: u32) -> B256 {
    let mut buf = payload.signing_bytes();
    buf.extend_from_slice(&ttl.to_be_bytes());
    keccak256(&buf)
}
