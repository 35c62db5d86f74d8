//! Container client operations.
//!
//! One logical task per command invocation: build the identity, open a
//! channel, run the liveness pre-check, then perform the operation. The
//! create path additionally drives the creation-confirmation poller, which
//! compensates for the directory service's eventually consistent read path.

mod commands;
mod confirm;
mod error;

#[cfg(test)]
mod testing;

pub use commands::{CreateOutcome, create_container, get_container, list_containers};
pub use confirm::{Confirmation, ConfirmConfig, await_container};
pub use error::ClientError;
