//! Score command implementation for the Haven CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use haven_core::{RawPreferences, RawTown};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_engine, load_json};
use crate::report::{summary, write_json, write_line};
use crate::{
    ARG_CONFIG, ARG_PREFERENCES, ARG_TOWN, CliError, ENV_SCORE_PREFERENCES, ENV_SCORE_TOWN,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score one town against a preference profile. The full \
                 breakdown is printed as JSON on stdout and a one-line \
                 summary with its band on stderr.",
    about = "Score one town"
)]
#[ortho_config(prefix = "HAVEN")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON preference profile.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Path to a JSON town record.
    #[arg(long = ARG_TOWN, value_name = "path")]
    #[serde(default)]
    pub(crate) town: Option<Utf8PathBuf>,
    /// Path to a JSON scoring configuration; built-in tables when omitted.
    #[arg(long = ARG_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) config: Option<Utf8PathBuf>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) preferences: Utf8PathBuf,
    pub(crate) town: Utf8PathBuf,
    pub(crate) config: Option<Utf8PathBuf>,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let preferences = args.preferences.ok_or(CliError::MissingArgument {
            field: ARG_PREFERENCES,
            env: ENV_SCORE_PREFERENCES,
        })?;
        let town = args.town.ok_or(CliError::MissingArgument {
            field: ARG_TOWN,
            env: ENV_SCORE_TOWN,
        })?;
        Ok(Self {
            preferences,
            town,
            config: args.config,
        })
    }
}

pub(crate) fn run_score(
    args: ScoreArgs,
    writer: &mut dyn Write,
    summary_writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_score(&config, writer, summary_writer)
}

pub(crate) fn execute_score(
    config: &ScoreConfig,
    writer: &mut dyn Write,
    summary_writer: &mut dyn Write,
) -> Result<(), CliError> {
    let engine = load_engine(config.config.as_deref())?;
    let preferences: RawPreferences = load_json(&config.preferences, ARG_PREFERENCES)?;
    let town: RawTown = load_json(&config.town, ARG_TOWN)?;
    let result = engine.score_raw(&preferences, &town)?;
    write_json(writer, &result)?;
    write_line(summary_writer, &summary(&result))
}
