//! tonic-backed implementation of the transport channel.

use alloy_primitives::Address;
use async_trait::async_trait;
use silo_primitives::{Container, ContainerId};
use tonic::transport::{Channel, Endpoint};

use crate::proto::container_service_client::ContainerServiceClient;
use crate::proto::{GetRequest, HealthRequest, ListRequest, PutRequest, RequestMeta};
use crate::{ContainerTransport, Envelope, HealthStatus, TransportError};

/// gRPC channel to one remote endpoint.
///
/// Connects over plain (to-be-upgraded) HTTP/2. Opened per command
/// invocation; the connection closes when the value is dropped.
#[derive(Debug, Clone)]
pub struct GrpcChannel {
    client: ContainerServiceClient<Channel>,
}

impl GrpcChannel {
    /// Connects to `host`, a `host:port` pair.
    pub async fn connect(host: &str) -> Result<Self, TransportError> {
        let endpoint = Endpoint::from_shared(format!("http://{host}"))
            .map_err(|e| TransportError::Unavailable(e.to_string()))?;
        let channel = endpoint.connect().await?;
        Ok(Self {
            client: ContainerServiceClient::new(channel),
        })
    }

    fn meta(envelope: &Envelope) -> RequestMeta {
        RequestMeta {
            ttl: envelope.ttl(),
            account: envelope.account().as_slice().to_vec(),
            signature: envelope.signature().as_bytes().to_vec(),
            debug: envelope.debug(),
        }
    }
}

#[async_trait]
impl ContainerTransport for GrpcChannel {
    async fn health(&self, envelope: &Envelope) -> Result<HealthStatus, TransportError> {
        let request = HealthRequest {
            meta: Some(Self::meta(envelope)),
        };
        let response = self.client.clone().health(request).await?.into_inner();
        Ok(HealthStatus {
            healthy: response.healthy,
            status: response.status,
        })
    }

    async fn put_container(
        &self,
        capacity: u64,
        basic_acl: u32,
        envelope: &Envelope,
    ) -> Result<ContainerId, TransportError> {
        let request = PutRequest {
            meta: Some(Self::meta(envelope)),
            capacity,
            basic_acl,
        };
        let response = self.client.clone().put(request).await?.into_inner();
        ContainerId::from_slice(&response.container_id)
            .map_err(|_| TransportError::Rejected("malformed container id in response".into()))
    }

    async fn get_container(
        &self,
        container_id: &ContainerId,
        envelope: &Envelope,
    ) -> Result<Container, TransportError> {
        let request = GetRequest {
            meta: Some(Self::meta(envelope)),
            container_id: container_id.as_bytes().to_vec(),
        };
        let response = self.client.clone().get(request).await?.into_inner();

        let container = response
            .container
            .ok_or_else(|| TransportError::Rejected("missing container in response".into()))?;
        let owner = Address::try_from(container.owner.as_slice())
            .map_err(|_| TransportError::Rejected("malformed owner address in response".into()))?;

        Ok(Container {
            capacity: container.capacity,
            basic_acl: container.basic_acl,
            salt: container.salt,
            owner,
            placement: container.placement,
        })
    }

    async fn list_containers(
        &self,
        envelope: &Envelope,
    ) -> Result<Vec<ContainerId>, TransportError> {
        let request = ListRequest {
            meta: Some(Self::meta(envelope)),
        };
        let response = self.client.clone().list(request).await?.into_inner();

        response
            .container_ids
            .iter()
            .map(|bytes| {
                ContainerId::from_slice(bytes).map_err(|_| {
                    TransportError::Rejected("malformed container id in response".into())
                })
            })
            .collect()
    }
}
