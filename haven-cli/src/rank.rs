//! Rank command implementation for the Haven CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use haven_core::RawPreferences;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::input::{load_engine, load_json};
use crate::report::write_json;
use crate::{
    ARG_CONFIG, ARG_LIMIT, ARG_PREFERENCES, ARG_TOWNS, CliError, ENV_RANK_PREFERENCES,
    ENV_RANK_TOWNS,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every town in a JSON catalog against a preference \
                 profile and print the ranking as JSON. Towns whose records \
                 cannot be decoded or normalized are listed as excluded \
                 with a reason code.",
    about = "Rank a catalog of towns"
)]
#[ortho_config(prefix = "HAVEN")]
pub(crate) struct RankArgs {
    /// Path to a JSON preference profile.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// Path to a JSON array of town records.
    #[arg(long = ARG_TOWNS, value_name = "path")]
    #[serde(default)]
    pub(crate) towns: Option<Utf8PathBuf>,
    /// Path to a JSON scoring configuration; built-in tables when omitted.
    #[arg(long = ARG_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) config: Option<Utf8PathBuf>,
    /// Print at most this many ranked towns.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    pub(crate) preferences: Utf8PathBuf,
    pub(crate) towns: Utf8PathBuf,
    pub(crate) config: Option<Utf8PathBuf>,
    pub(crate) limit: Option<usize>,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let preferences = args.preferences.ok_or(CliError::MissingArgument {
            field: ARG_PREFERENCES,
            env: ENV_RANK_PREFERENCES,
        })?;
        let towns = args.towns.ok_or(CliError::MissingArgument {
            field: ARG_TOWNS,
            env: ENV_RANK_TOWNS,
        })?;
        Ok(Self {
            preferences,
            towns,
            config: args.config,
            limit: args.limit,
        })
    }
}

pub(crate) fn run_rank(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_rank(&config, writer)
}

pub(crate) fn execute_rank(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let engine = load_engine(config.config.as_deref())?;
    let preferences: RawPreferences = load_json(&config.preferences, ARG_PREFERENCES)?;
    let records: Vec<Value> = load_json(&config.towns, ARG_TOWNS)?;
    let ranking = engine.rank_records(&preferences, &records, config.limit)?;
    log::info!(
        "ranked {} towns, {} unranked, {} excluded",
        ranking.ranked.len(),
        ranking.unranked.len(),
        ranking.excluded.len()
    );
    write_json(writer, &ranking)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
