//! Client-side error taxonomy.

use silo_identity::IdentityError;
use silo_rpc::TransportError;

/// Errors from a single command invocation.
///
/// All errors are local to the invocation; nothing is queued, centrally
/// logged, or retried across process restarts.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Identity construction or signing failed.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// The liveness pre-check could not be completed.
    #[error("health check failed: {0}")]
    HealthCheck(#[source] TransportError),

    /// The endpoint answered the pre-check but reported itself unhealthy.
    #[error("endpoint unhealthy: {0}")]
    Unhealthy(String),

    /// A remote call failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
