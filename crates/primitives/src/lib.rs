//! Core types for the silo container client.
//!
//! Provides the opaque [`ContainerId`], the [`BasicAcl`] access policy with
//! its well-known constants, and the [`Container`] descriptor returned by
//! the directory service.

mod acl;
mod cid;
mod container;

pub use acl::{
    BasicAcl, InvalidAclLiteral, PRIVATE_BASIC_ACL, PUBLIC_BASIC_ACL, READONLY_BASIC_ACL,
};
pub use cid::{CONTAINER_ID_LENGTH, ContainerId, InvalidCidFormat};
pub use container::Container;
