//! Container command orchestration.
//!
//! Each operation follows the same shape: one identity, one channel, a
//! liveness pre-check, then the call. A failed pre-check aborts the command.
//! Writes are never retried; only the confirmation read-back polls.

use silo_identity::Identity;
use silo_primitives::{BasicAcl, Container, ContainerId};
use silo_rpc::{ContainerTransport, Envelope, HealthStatus, Payload, SINGLE_FORWARDED_TTL};
use tokio::sync::watch;
use tracing::info;

use crate::confirm::{Confirmation, ConfirmConfig, await_container};
use crate::error::ClientError;

/// Outcome of a create command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// Provisional identifier assigned by the service.
    pub container_id: ContainerId,
    /// Result of polling for the container's visibility.
    pub confirmation: Confirmation,
}

/// Submits a container creation request, then polls until the container
/// becomes visible or the attempt budget runs out.
pub async fn create_container<T: ContainerTransport>(
    transport: &T,
    identity: &Identity,
    capacity: u64,
    basic_acl: BasicAcl,
    config: &ConfirmConfig,
    debug_mode: bool,
    cancel: &mut watch::Receiver<bool>,
) -> Result<CreateOutcome, ClientError> {
    check_health(transport, identity, debug_mode).await?;

    let acl_value = basic_acl.value();
    let envelope = Envelope::sign(
        Payload::Put {
            capacity,
            basic_acl: acl_value,
        },
        identity,
        SINGLE_FORWARDED_TTL,
        debug_mode,
    )?;
    let container_id = transport
        .put_container(capacity, acl_value, &envelope)
        .await?;
    info!(%container_id, "creation accepted, awaiting visibility");

    let confirmation =
        await_container(transport, &container_id, identity, debug_mode, config, cancel).await?;

    Ok(CreateOutcome {
        container_id,
        confirmation,
    })
}

/// Lists the identifiers of every container owned by `identity`.
pub async fn list_containers<T: ContainerTransport>(
    transport: &T,
    identity: &Identity,
    debug_mode: bool,
) -> Result<Vec<ContainerId>, ClientError> {
    check_health(transport, identity, debug_mode).await?;

    let envelope = Envelope::sign(Payload::List, identity, SINGLE_FORWARDED_TTL, debug_mode)?;
    Ok(transport.list_containers(&envelope).await?)
}

/// Fetches the descriptor of one container.
pub async fn get_container<T: ContainerTransport>(
    transport: &T,
    identity: &Identity,
    container_id: &ContainerId,
    debug_mode: bool,
) -> Result<Container, ClientError> {
    check_health(transport, identity, debug_mode).await?;

    let envelope = Envelope::sign(
        Payload::Get {
            container_id: *container_id,
        },
        identity,
        SINGLE_FORWARDED_TTL,
        debug_mode,
    )?;
    Ok(transport.get_container(container_id, &envelope).await?)
}

/// Fail-fast liveness pre-check.
async fn check_health<T: ContainerTransport>(
    transport: &T,
    identity: &Identity,
    debug_mode: bool,
) -> Result<HealthStatus, ClientError> {
    let envelope = Envelope::sign(Payload::Health, identity, SINGLE_FORWARDED_TTL, debug_mode)?;
    let status = transport
        .health(&envelope)
        .await
        .map_err(ClientError::HealthCheck)?;

    if !status.healthy {
        return Err(ClientError::Unhealthy(status.status));
    }
    info!(status = %status.status, "endpoint healthy");
    Ok(status)
}
