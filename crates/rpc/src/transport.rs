//! Transport channel trait definition.

use async_trait::async_trait;
use silo_primitives::{Container, ContainerId};

use crate::{Envelope, TransportError};

/// Health report from the remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    /// Whether the endpoint considers itself serving.
    pub healthy: bool,
    /// Free-form diagnostic line from the endpoint.
    pub status: String,
}

/// One remote endpoint of the container directory service.
///
/// Four logical calls over the signed request envelope. An implementation is
/// opened per command invocation and owned exclusively by it; dropping the
/// value closes the connection.
#[async_trait]
#[auto_impl::auto_impl(&, Arc)]
pub trait ContainerTransport: Send + Sync {
    /// Liveness and diagnostic check.
    async fn health(&self, envelope: &Envelope) -> Result<HealthStatus, TransportError>;

    /// Submits a creation request.
    ///
    /// The service accepts it for asynchronous materialization and returns
    /// the provisional identifier immediately; a successful return does NOT
    /// mean the container is readable yet.
    async fn put_container(
        &self,
        capacity: u64,
        basic_acl: u32,
        envelope: &Envelope,
    ) -> Result<ContainerId, TransportError>;

    /// Reads a container descriptor back.
    ///
    /// Fails with [`TransportError::NotFound`] while the identifier is not
    /// yet visible, including just-created containers that have not
    /// propagated.
    async fn get_container(
        &self,
        container_id: &ContainerId,
        envelope: &Envelope,
    ) -> Result<Container, TransportError>;

    /// Lists every container owned by the signer's account.
    ///
    /// No pagination; ordering is whatever the server returns.
    async fn list_containers(&self, envelope: &Envelope)
    -> Result<Vec<ContainerId>, TransportError>;
}
