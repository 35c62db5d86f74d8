//! Transport boundary for the silo container client.
//!
//! This crate provides the signed [`Envelope`] wrapped around every call,
//! the [`ContainerTransport`] trait abstracting one remote endpoint, and the
//! tonic-backed [`GrpcChannel`] implementation:
//!
//! - Health check (liveness pre-check issued by every command)
//! - PutContainer (asynchronous creation, returns the provisional id)
//! - GetContainer (eventually-consistent read-back)
//! - ListContainers (ids owned by the signer)

mod envelope;
mod error;
mod grpc;
mod transport;

pub use envelope::{Envelope, Payload, SINGLE_FORWARDED_TTL};
pub use error::TransportError;
pub use grpc::GrpcChannel;
pub use transport::{ContainerTransport, HealthStatus};

// Re-export generated wire types for external use.
pub mod proto {
    tonic::include_proto!("silo.container.v1");
}
