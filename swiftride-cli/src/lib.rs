//! Command-line interface for planning SwiftRide trips.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};

mod error;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

const ARG_PLAN_REQUEST: &str = "request";
const ARG_TRANSIT_BASE_URL: &str = "transit-base-url";
const ARG_TRANSIT_TIMEOUT_SECS: &str = "transit-timeout-secs";
const ARG_TRANSIT_CONCURRENCY: &str = "transit-concurrency";
const ARG_TRANSIT_REGION: &str = "transit-region";
const ARG_TRANSIT_LANGUAGE: &str = "transit-language";
const ARG_CANDIDATE_COUNT: &str = "candidate-count";
const ARG_SEARCH_LIMIT: &str = "search-limit";
const ENV_PLAN_REQUEST: &str = "SWIFTRIDE_CMDS_PLAN_REQUEST_PATH";

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Install the process logger.
///
/// Honours `RUST_LOG`, defaulting to `info`.
///
/// # Errors
///
/// Returns an error when a logger is already installed.
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp_secs()
        .format_module_path(false)
        .try_init()
}

/// Run the SwiftRide CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments, configuration or planning fail.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--help` and `--version` are not failures.
        Err(err) if !err.use_stderr() => {
            err.print().map_err(CliError::WriteOutput)?;
            return Ok(());
        }
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "swiftride",
    about = "Plan hybrid scooter and public-transit trips",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan the fastest scooter, transit, scooter trip for a request.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
