//! Transport-level error taxonomy.

use tonic::Code;

/// Errors surfaced by the transport channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The remote endpoint cannot be reached.
    #[error("endpoint unavailable: {0}")]
    Unavailable(String),

    /// The call did not complete within its deadline.
    #[error("deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// The remote service rejected the signer.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// The requested entity is not (or not yet) visible.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other remote rejection, carrying the server message.
    #[error("rejected by server: {0}")]
    Rejected(String),
}

impl TransportError {
    /// Whether waiting and re-reading can plausibly succeed.
    ///
    /// Under an eventually-consistent read path, not-yet-visible and
    /// reachability failures resolve with time; authentication failures and
    /// outright rejections do not.
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Unavailable(_) | Self::DeadlineExceeded(_)
        )
    }
}

impl From<tonic::Status> for TransportError {
    fn from(status: tonic::Status) -> Self {
        let message = status.message().to_owned();
        match status.code() {
            Code::Unavailable => Self::Unavailable(message),
            Code::DeadlineExceeded => Self::DeadlineExceeded(message),
            Code::Unauthenticated | Code::PermissionDenied => Self::Unauthenticated(message),
            Code::NotFound => Self::NotFound(message),
            _ => Self::Rejected(message),
        }
    }
}

impl From<tonic::transport::Error> for TransportError {
    fn from(err: tonic::transport::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}
