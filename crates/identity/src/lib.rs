//! Signing identity for silo commands.
//!
//! One identity per command invocation: loaded once at startup and passed by
//! reference down the call chain. Key material never leaves process memory
//! and is never logged.

use std::fmt;

use alloy_primitives::{Address, B256, Signature};
use alloy_signer::SignerSync;
use alloy_signer::k256::ecdsa::SigningKey;
use alloy_signer_local::{LocalSigner, LocalSignerError, PrivateKeySigner};

mod args;

pub use args::KeyArgs;

/// Failures constructing or using an identity.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The raw secret does not decode to a valid signing key.
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(#[source] LocalSignerError),

    /// No key material was supplied.
    #[error("no private key supplied (use --private-key or SILO_PRIVATE_KEY)")]
    MissingKey,

    /// The underlying signer refused to sign.
    #[error("signing failed: {0}")]
    Signing(#[from] alloy_signer::Error),
}

/// Signing key plus its derived account address.
///
/// The address identifies the account to the remote service; every container
/// is owned by the address that signed its creation request.
#[derive(Clone)]
pub struct Identity {
    signer: LocalSigner<SigningKey>,
    address: Address,
}

impl Identity {
    /// Loads an identity from a hex-encoded secret key.
    pub fn from_hex(secret: &str) -> Result<Self, IdentityError> {
        let signer: PrivateKeySigner =
            secret.parse().map_err(IdentityError::InvalidKeyFormat)?;
        let address = signer.address();
        Ok(Self { signer, address })
    }

    /// Creates a random ephemeral identity for testing.
    pub fn random() -> Self {
        let signer = PrivateKeySigner::random();
        let address = signer.address();
        Self { signer, address }
    }

    /// Derived account address of this identity.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Signs a 32-byte digest, producing a recoverable signature.
    pub fn sign_digest(&self, digest: B256) -> Result<Signature, IdentityError> {
        Ok(self.signer.sign_hash_sync(&digest)?)
    }
}

// Show only the derived address; the key itself stays out of logs.
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Identity").field(&self.address).finish()
    }
}
