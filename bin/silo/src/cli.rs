//! Command-line interface for the silo container client.

use clap::{Args, Parser, Subcommand};
use silo_client::{
    ClientError, ConfirmConfig, Confirmation, create_container, get_container, list_containers,
};
use silo_identity::{IdentityError, KeyArgs};
use silo_primitives::{BasicAcl, ContainerId, InvalidAclLiteral, InvalidCidFormat};
use silo_rpc::GrpcChannel;
use tokio::sync::watch;

use crate::output;

/// silo - container client for a distributed object-storage network
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Logging configuration
    #[command(flatten)]
    pub logs: LogArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether any subcommand asked for diagnostic mode.
    pub fn debug_requested(&self) -> bool {
        let Commands::Container(command) = &self.command;
        match command {
            ContainerCommands::Put(args) => args.conn.debug,
            ContainerCommands::List(args) => args.conn.debug,
            ContainerCommands::Get(args) => args.conn.debug,
        }
    }
}

/// Logging configuration
#[derive(Debug, Args, Clone)]
pub struct LogArgs {
    /// Silence all output
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Log filter
    #[arg(long, value_name = "DIRECTIVE")]
    pub filter: Option<String>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Container lifecycle operations
    #[command(subcommand)]
    Container(ContainerCommands),
}

/// Container lifecycle operations.
#[derive(Debug, Subcommand)]
pub enum ContainerCommands {
    /// Create a container and wait for it to become visible
    Put(PutArgs),

    /// List containers owned by the signing key
    List(ListArgs),

    /// Fetch a container descriptor by id
    Get(GetArgs),
}

/// Connection configuration shared by every command.
#[derive(Debug, Args, Clone)]
#[command(next_help_heading = "Connection Configuration")]
pub struct ConnectionArgs {
    /// Remote endpoint as host:port
    #[arg(long, value_name = "HOST:PORT", default_value = "127.0.0.1:8080")]
    pub host: String,

    /// Key material configuration
    #[command(flatten)]
    pub key: KeyArgs,

    /// Mark requests for diagnostic echo and log at debug level
    #[arg(long)]
    pub debug: bool,
}

/// Arguments for 'container put'.
#[derive(Debug, Args)]
pub struct PutArgs {
    /// Size quota of the container in bytes
    pub capacity: u64,

    /// Basic ACL: public, private, readonly, or a raw hex literal
    pub basic_acl: String,

    #[command(flatten)]
    pub conn: ConnectionArgs,
}

/// Arguments for 'container list'.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub conn: ConnectionArgs,
}

/// Arguments for 'container get'.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Container id in base-58 text form
    pub cid: String,

    #[command(flatten)]
    pub conn: ConnectionArgs,
}

/// Errors a command can exit with, each mapped to a distinct exit code.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Operator-supplied container id text did not parse.
    #[error("wrong cid format: {0}")]
    InvalidCid(#[from] InvalidCidFormat),

    /// Operator-supplied ACL token did not resolve.
    #[error("wrong basic ACL: {0}")]
    InvalidAcl(#[from] InvalidAclLiteral),

    /// Key material missing or malformed.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// The operation failed against the remote endpoint.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Creation was accepted but visibility was not confirmed in time.
    ///
    /// The container may still appear; this is uncertainty, not failure.
    #[error("could not confirm container creation after {attempts} attempts (it may still become visible)")]
    Unconfirmed { attempts: u32 },
}

/// Executes the parsed command.
pub async fn run(cli: Cli) -> Result<(), CommandError> {
    let Commands::Container(command) = cli.command;
    match command {
        ContainerCommands::Put(args) => put(args).await,
        ContainerCommands::List(args) => list(args).await,
        ContainerCommands::Get(args) => get(args).await,
    }
}

async fn put(args: PutArgs) -> Result<(), CommandError> {
    // Resolved once, before anything touches the network.
    let basic_acl: BasicAcl = args.basic_acl.parse()?;
    let identity = args.conn.key.identity()?;

    let transport = connect(&args.conn).await?;
    let mut cancel = cancel_on_ctrl_c();

    let outcome = create_container(
        &transport,
        &identity,
        args.capacity,
        basic_acl,
        &ConfirmConfig::default(),
        args.conn.debug,
        &mut cancel,
    )
    .await?;

    match outcome.confirmation {
        Confirmation::Confirmed(container) => {
            println!();
            output::print_container(&outcome.container_id, &container);
            Ok(())
        }
        Confirmation::Exhausted { attempts } => {
            println!();
            println!("Container accepted: {}", outcome.container_id);
            Err(CommandError::Unconfirmed { attempts })
        }
    }
}

async fn list(args: ListArgs) -> Result<(), CommandError> {
    let identity = args.conn.key.identity()?;
    let transport = connect(&args.conn).await?;

    let ids = list_containers(&transport, &identity, args.conn.debug).await?;

    println!();
    println!("Containers owned by {}:", identity.address());
    println!();
    for id in &ids {
        println!("CID = {id}");
    }
    Ok(())
}

async fn get(args: GetArgs) -> Result<(), CommandError> {
    // Parse before any remote contact; bad text never reaches the network.
    let container_id: ContainerId = args.cid.parse()?;
    let identity = args.conn.key.identity()?;

    let transport = connect(&args.conn).await?;
    let container = get_container(&transport, &identity, &container_id, args.conn.debug).await?;

    println!();
    output::print_container(&container_id, &container);
    Ok(())
}

async fn connect(conn: &ConnectionArgs) -> Result<GrpcChannel, CommandError> {
    tracing::debug!(host = %conn.host, "connecting");
    GrpcChannel::connect(&conn.host)
        .await
        .map_err(|err| CommandError::Client(ClientError::Transport(err)))
}

/// Watch channel that flips to `true` on ctrl-c.
fn cancel_on_ctrl_c() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(true);
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn_args() -> ConnectionArgs {
        ConnectionArgs {
            host: "127.0.0.1:1".into(),
            key: KeyArgs {
                private_key: Some(
                    "0000000000000000000000000000000000000000000000000000000000000001".into(),
                ),
            },
            debug: false,
        }
    }

    #[test]
    fn parses_container_put() {
        let cli = Cli::parse_from([
            "silo",
            "container",
            "put",
            "1000",
            "public",
            "--host",
            "10.0.0.1:9090",
            "--private-key",
            "0000000000000000000000000000000000000000000000000000000000000001",
        ]);

        let Commands::Container(ContainerCommands::Put(args)) = cli.command else {
            panic!("expected put command");
        };
        assert_eq!(args.capacity, 1000);
        assert_eq!(args.basic_acl, "public");
        assert_eq!(args.conn.host, "10.0.0.1:9090");
    }

    #[test]
    fn host_defaults_when_omitted() {
        let cli = Cli::parse_from(["silo", "container", "list"]);
        let Commands::Container(ContainerCommands::List(args)) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.conn.host, "127.0.0.1:8080");
    }

    #[test]
    fn debug_flag_is_visible_globally() {
        let cli = Cli::parse_from(["silo", "container", "get", "abc", "--debug"]);
        assert!(cli.debug_requested());
    }

    #[tokio::test]
    async fn bad_cid_fails_before_any_remote_contact() {
        // '0' is not in the base-58 alphabet; the parse failure must win over
        // the (unreachable) endpoint in the connection args.
        let result = get(GetArgs {
            cid: "0OIl".into(),
            conn: conn_args(),
        })
        .await;

        assert!(matches!(result, Err(CommandError::InvalidCid(_))));
    }

    #[tokio::test]
    async fn bad_acl_fails_before_any_remote_contact() {
        let result = put(PutArgs {
            capacity: 1000,
            basic_acl: "friends-only".into(),
            conn: conn_args(),
        })
        .await;

        assert!(matches!(result, Err(CommandError::InvalidAcl(_))));
    }
}
