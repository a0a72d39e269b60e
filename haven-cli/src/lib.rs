//! Command-line interface for the Haven matching engine.
//!
//! Three subcommands wrap the library:
//! - `rank` scores a catalog of towns against a preference profile and
//!   prints the ranking as JSON.
//! - `score` scores one town, printing the full breakdown as JSON and a
//!   one-line summary on stderr.
//! - `check-config` validates a scoring configuration file.
//!
//! Arguments merge from flags, configuration files and `HAVEN_*` environment
//! variables via `ortho_config`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod check;
mod error;
mod input;
mod rank;
mod report;
mod score;

pub use error::CliError;

use check::{CheckConfigArgs, run_check_config};
use rank::{RankArgs, run_rank};
use score::{ScoreArgs, run_score};

pub(crate) const ARG_PREFERENCES: &str = "preferences";
pub(crate) const ARG_TOWNS: &str = "towns";
pub(crate) const ARG_TOWN: &str = "town";
pub(crate) const ARG_CONFIG: &str = "config";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ENV_RANK_PREFERENCES: &str = "HAVEN_CMDS_RANK_PREFERENCES";
pub(crate) const ENV_RANK_TOWNS: &str = "HAVEN_CMDS_RANK_TOWNS";
pub(crate) const ENV_SCORE_PREFERENCES: &str = "HAVEN_CMDS_SCORE_PREFERENCES";
pub(crate) const ENV_SCORE_TOWN: &str = "HAVEN_CMDS_SCORE_TOWN";
pub(crate) const ENV_CHECK_CONFIG: &str = "HAVEN_CMDS_CHECK_CONFIG_CONFIG";

/// Run the Haven CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, an input file cannot be
/// read, the scoring configuration is rejected or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Rank(args) => run_rank(args, &mut stdout),
        Command::Score(args) => {
            let mut stderr = std::io::stderr().lock();
            run_score(args, &mut stdout, &mut stderr)
        }
        Command::CheckConfig(args) => run_check_config(&args, &mut stdout),
    }
}

/// Install a stderr log formatter filtered by `RUST_LOG`.
///
/// Library crates log through the `log` facade; the formatter captures those
/// records too. Defaults to warnings when `RUST_LOG` is unset.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        log::debug!("a global logger is already installed");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "haven",
    about = "Match retirement destinations against preference profiles",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Rank a catalog of towns against a preference profile.
    Rank(RankArgs),
    /// Score one town against a preference profile.
    Score(ScoreArgs),
    /// Validate a scoring configuration file.
    CheckConfig(CheckConfigArgs),
}

#[cfg(test)]
mod tests;
