//! silo — command-line client for a distributed object-storage network.

mod cli;
mod exit_codes;
mod logging;
mod output;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Cli::parse();

    if let Err(err) = logging::init_logging(&args.logs, args.debug_requested()) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::from(exit_codes::codes::GENERIC_ERROR);
    }

    match cli::run(args).await {
        Ok(()) => ExitCode::from(exit_codes::codes::SUCCESS),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(exit_codes::map_command_error(&err))
        }
    }
}
