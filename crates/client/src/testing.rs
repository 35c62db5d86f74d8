//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use alloy_primitives::Address;
use async_trait::async_trait;
use silo_primitives::{Container, ContainerId, PUBLIC_BASIC_ACL};
use silo_rpc::{ContainerTransport, Envelope, HealthStatus, TransportError};

pub(crate) fn test_cid() -> ContainerId {
    ContainerId::from_bytes([0xAB; 32])
}

pub(crate) fn test_container(owner: Address) -> Container {
    Container {
        capacity: 1000,
        basic_acl: PUBLIC_BASIC_ACL,
        salt: vec![0x01, 0x02, 0x03],
        owner,
        placement: "SELECT 2 NODE".into(),
    }
}

/// Transport double with per-call scripting.
///
/// Reads pop from a queue of scripted results; once the queue drains, the
/// standing `fallback_get` answer repeats (not-found by default, mimicking a
/// container that never becomes visible).
pub(crate) struct MockTransport {
    health: Mutex<Result<HealthStatus, TransportError>>,
    put: Mutex<Result<ContainerId, TransportError>>,
    list: Mutex<Result<Vec<ContainerId>, TransportError>>,
    gets: Mutex<VecDeque<Result<Container, TransportError>>>,
    fallback_get: Mutex<Result<Container, TransportError>>,

    put_calls: AtomicU32,
    get_calls: AtomicU32,
    list_calls: AtomicU32,
}

impl MockTransport {
    /// A serving endpoint that accepts puts and never shows the container.
    pub(crate) fn healthy() -> Self {
        Self {
            health: Mutex::new(Ok(HealthStatus {
                healthy: true,
                status: "serving".into(),
            })),
            put: Mutex::new(Ok(test_cid())),
            list: Mutex::new(Ok(Vec::new())),
            gets: Mutex::new(VecDeque::new()),
            fallback_get: Mutex::new(Err(TransportError::NotFound(
                "container not found".into(),
            ))),
            put_calls: AtomicU32::new(0),
            get_calls: AtomicU32::new(0),
            list_calls: AtomicU32::new(0),
        }
    }

    pub(crate) fn set_health(&self, result: Result<HealthStatus, TransportError>) {
        *self.health.lock().unwrap() = result;
    }

    pub(crate) fn set_list(&self, result: Result<Vec<ContainerId>, TransportError>) {
        *self.list.lock().unwrap() = result;
    }

    /// Queues the result of the next read.
    pub(crate) fn script_get(&self, result: Result<Container, TransportError>) {
        self.gets.lock().unwrap().push_back(result);
    }

    /// Makes every unscripted read return `result`.
    pub(crate) fn always_get(&self, result: Result<Container, TransportError>) {
        *self.fallback_get.lock().unwrap() = result;
    }

    pub(crate) fn put_calls(&self) -> u32 {
        self.put_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn get_calls(&self) -> u32 {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn list_calls(&self) -> u32 {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContainerTransport for MockTransport {
    async fn health(&self, _envelope: &Envelope) -> Result<HealthStatus, TransportError> {
        self.health.lock().unwrap().clone()
    }

    async fn put_container(
        &self,
        _capacity: u64,
        _basic_acl: u32,
        _envelope: &Envelope,
    ) -> Result<ContainerId, TransportError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        self.put.lock().unwrap().clone()
    }

    async fn get_container(
        &self,
        _container_id: &ContainerId,
        _envelope: &Envelope,
    ) -> Result<Container, TransportError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        match self.gets.lock().unwrap().pop_front() {
            Some(result) => result,
            None => self.fallback_get.lock().unwrap().clone(),
        }
    }

    async fn list_containers(
        &self,
        _envelope: &Envelope,
    ) -> Result<Vec<ContainerId>, TransportError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list.lock().unwrap().clone()
    }
}
