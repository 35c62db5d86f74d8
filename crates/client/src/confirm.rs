//! Creation-confirmation polling.
//!
//! A put is accepted asynchronously: the directory service hands back the
//! provisional identifier before the container is readable everywhere. The
//! poller re-reads the identifier until it becomes visible or a fixed
//! attempt budget runs out, tolerating propagation latency without blocking
//! forever and without declaring false negatives early.

use std::time::Duration;

use silo_identity::Identity;
use silo_primitives::{Container, ContainerId};
use silo_rpc::{ContainerTransport, Envelope, Payload, SINGLE_FORWARDED_TTL};
use tokio::sync::watch;
use tokio::time;
use tracing::{debug, info};

use crate::ClientError;

/// Attempt budget and inter-attempt delay for confirmation polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmConfig {
    /// Maximum read-back attempts before giving up.
    pub max_attempts: u32,
    /// Fixed delay preceding each attempt.
    pub delay: Duration,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            delay: Duration::from_millis(500),
        }
    }
}

/// Terminal state of a confirmation poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// The container became visible; its descriptor was read back.
    Confirmed(Container),

    /// The attempt budget ran out (or the wait was cancelled) before the
    /// container became visible.
    ///
    /// Not a creation failure: the put may have succeeded server-side and
    /// simply not propagated yet.
    Exhausted {
        /// Read-back attempts actually made.
        attempts: u32,
    },
}

/// Polls the read path until `container_id` becomes visible.
///
/// Every attempt waits the configured delay, signs a fresh envelope, and
/// issues one read. A transient failure (not yet visible, unreachable,
/// deadline) consumes one attempt; a hard failure (authentication,
/// rejection) aborts immediately since waiting cannot resolve it. Writing
/// `true` to `cancel` ends the wait early with the attempts made so far.
///
/// The poll holds no state beyond its attempt counter; re-running it for an
/// already visible container simply re-confirms on the first attempt.
pub async fn await_container<T: ContainerTransport>(
    transport: &T,
    container_id: &ContainerId,
    identity: &Identity,
    debug_mode: bool,
    config: &ConfirmConfig,
    cancel: &mut watch::Receiver<bool>,
) -> Result<Confirmation, ClientError> {
    let mut attempts = 0u32;

    while attempts < config.max_attempts {
        tokio::select! {
            () = time::sleep(config.delay) => {}
            () = cancelled(cancel) => {
                debug!(attempts, "confirmation poll cancelled");
                return Ok(Confirmation::Exhausted { attempts });
            }
        }

        attempts += 1;
        let envelope = Envelope::sign(
            Payload::Get {
                container_id: *container_id,
            },
            identity,
            SINGLE_FORWARDED_TTL,
            debug_mode,
        )?;

        match transport.get_container(container_id, &envelope).await {
            Ok(container) => {
                info!(%container_id, attempt = attempts, "container confirmed");
                return Ok(Confirmation::Confirmed(container));
            }
            Err(err) if err.is_transient() => {
                debug!(attempt = attempts, error = %err, "not yet visible");
            }
            Err(err) => return Err(ClientError::Transport(err)),
        }
    }

    info!(%container_id, attempts, "could not confirm container creation");
    Ok(Confirmation::Exhausted { attempts })
}

/// Resolves once the cancel channel observes `true`; never resolves if the
/// sender goes away without cancelling.
async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    loop {
        if *cancel.borrow_and_update() {
            return;
        }
        if cancel.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
