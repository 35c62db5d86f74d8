//! Logging configuration for the silo CLI.

use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::LogArgs;

/// Initialize logging based on command line arguments.
///
/// The filter is built with the following precedence:
/// 1. If `--quiet` is set, only errors are shown
/// 2. Otherwise, start with `RUST_LOG` env var if set, or default to info level
/// 3. Apply verbosity flags (-v, -vv, etc.) and `--debug` to raise the level
/// 4. Apply any custom filter from `--filter`
pub fn init_logging(args: &LogArgs, debug: bool) -> Result<()> {
    let filter = if args.quiet {
        EnvFilter::new("error")
    } else {
        let verbosity = args.verbosity.max(u8::from(debug));
        let base_level = match verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };

        let mut filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(base_level));

        if let Some(custom_filter) = &args.filter {
            for directive in custom_filter.split(',') {
                if let Ok(d) = directive.parse() {
                    filter = filter.add_directive(d);
                }
            }
        }

        filter
    };

    // Logs go to stderr; stdout is reserved for command results.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    Ok(())
}
