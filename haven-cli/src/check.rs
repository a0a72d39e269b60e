//! Configuration check command for the Haven CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::load_engine;
use crate::report::write_line;
use crate::{ARG_CONFIG, CliError, ENV_CHECK_CONFIG};

/// CLI arguments for the `check-config` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Parse a scoring configuration and validate its weights, \
                 partial-credit fractions, adjacency tables, equivalences \
                 and cost brackets without scoring anything.",
    about = "Validate a scoring configuration"
)]
#[ortho_config(prefix = "HAVEN")]
pub(crate) struct CheckConfigArgs {
    /// Path to the JSON scoring configuration.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) config: Option<Utf8PathBuf>,
}

pub(crate) fn run_check_config(
    args: &CheckConfigArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let path = merged.config.ok_or(CliError::MissingArgument {
        field: ARG_CONFIG,
        env: ENV_CHECK_CONFIG,
    })?;
    check_config_file(&path, writer)
}

pub(crate) fn check_config_file(path: &Utf8Path, writer: &mut dyn Write) -> Result<(), CliError> {
    load_engine(Some(path))?;
    write_line(writer, &format!("{path}: configuration is valid"))
}
