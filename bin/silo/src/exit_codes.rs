//! Deterministic exit codes for command outcomes.
//!
//! The reference client exited zero regardless of outcome; these codes make
//! the three terminal classes distinguishable to scripts: user input that
//! never reached the network, transport failures, and the soft
//! could-not-confirm outcome of a create.

use silo_client::ClientError;

use crate::cli::CommandError;

/// Exit code constants.
pub mod codes {
    /// Success.
    pub const SUCCESS: u8 = 0;

    /// Validation error (bad CID text, bad ACL literal, bad key material).
    ///
    /// Returned when arguments fail local validation before any remote
    /// call is issued.
    pub const VALIDATION_ERROR: u8 = 10;

    /// Transport or remote failure (unreachable endpoint, failed health
    /// pre-check, authentication failure, server rejection).
    pub const TRANSPORT_ERROR: u8 = 20;

    /// Creation accepted but not confirmed within the attempt budget.
    ///
    /// Distinguished from failure: the container may still become visible.
    pub const UNCONFIRMED: u8 = 30;

    /// Generic error (fallback for unmapped errors).
    pub const GENERIC_ERROR: u8 = 1;
}

/// Maps a [`CommandError`] to its exit code. The mapping is deterministic so
/// scripts can branch on it.
pub fn map_command_error(error: &CommandError) -> u8 {
    match error {
        CommandError::InvalidCid(_) | CommandError::InvalidAcl(_) | CommandError::Identity(_) => {
            codes::VALIDATION_ERROR
        }
        CommandError::Client(client) => match client {
            ClientError::Identity(_) => codes::VALIDATION_ERROR,
            ClientError::HealthCheck(_) | ClientError::Unhealthy(_) | ClientError::Transport(_) => {
                codes::TRANSPORT_ERROR
            }
        },
        CommandError::Unconfirmed { .. } => codes::UNCONFIRMED,
    }
}

#[cfg(test)]
mod tests {
    use silo_identity::IdentityError;
    use silo_primitives::{InvalidAclLiteral, InvalidCidFormat};
    use silo_rpc::TransportError;

    use super::*;

    #[test]
    fn user_input_errors_map_to_validation() {
        assert_eq!(
            map_command_error(&CommandError::InvalidCid(InvalidCidFormat)),
            codes::VALIDATION_ERROR
        );
        assert_eq!(
            map_command_error(&CommandError::InvalidAcl(InvalidAclLiteral("x".into()))),
            codes::VALIDATION_ERROR
        );
        assert_eq!(
            map_command_error(&CommandError::Identity(IdentityError::MissingKey)),
            codes::VALIDATION_ERROR
        );
    }

    #[test]
    fn transport_failures_map_to_transport() {
        let unreachable = CommandError::Client(ClientError::Transport(
            TransportError::Unavailable("connect refused".into()),
        ));
        assert_eq!(map_command_error(&unreachable), codes::TRANSPORT_ERROR);

        let unhealthy = CommandError::Client(ClientError::Unhealthy("draining".into()));
        assert_eq!(map_command_error(&unhealthy), codes::TRANSPORT_ERROR);

        let precheck = CommandError::Client(ClientError::HealthCheck(
            TransportError::DeadlineExceeded("timed out".into()),
        ));
        assert_eq!(map_command_error(&precheck), codes::TRANSPORT_ERROR);
    }

    #[test]
    fn unconfirmed_creation_is_its_own_code() {
        assert_eq!(
            map_command_error(&CommandError::Unconfirmed { attempts: 10 }),
            codes::UNCONFIRMED
        );
    }
}
