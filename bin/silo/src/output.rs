//! Human-readable rendering of command results.

use silo_primitives::{Container, ContainerId};

/// Prints a container descriptor in the operator-facing layout.
pub fn print_container(container_id: &ContainerId, container: &Container) {
    println!("Container:");
    println!("CID = {container_id}");
    println!("Salt = {}", hex::encode(&container.salt));
    println!("Capacity = {}", container.capacity);
    println!("OwnerID = {}", container.owner);
    println!("Rules = {}", container.placement);
    println!("ACL = {:X}", container.basic_acl);
}
