//! Command-line arguments for supplying key material.

use clap::Args;

use crate::{Identity, IdentityError};

/// Key material configuration.
#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Identity Configuration")]
pub struct KeyArgs {
    /// Hex-encoded private key used to sign every request.
    ///
    /// Can also be set via the SILO_PRIVATE_KEY environment variable.
    #[arg(
        long,
        value_name = "PRIVATE_KEY",
        env = "SILO_PRIVATE_KEY",
        hide_env_values = true
    )]
    pub private_key: Option<String>,
}

impl KeyArgs {
    /// Loads the identity from the supplied key material.
    pub fn identity(&self) -> Result<Identity, IdentityError> {
        let secret = self.private_key.as_deref().ok_or(IdentityError::MissingKey)?;
        Identity::from_hex(secret)
    }
}
