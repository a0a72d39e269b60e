//! Loading JSON inputs through capability-based file access.

use std::io::{self, BufReader};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use haven_scorer::{MatchEngine, ScoringConfig};
use serde::de::DeserializeOwned;

use crate::{ARG_CONFIG, CliError};

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Decode a JSON document supplied through the `field` option.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Build the engine from a configuration file, or the built-in tables when
/// no file is given.
pub(crate) fn load_engine(path: Option<&Utf8Path>) -> Result<MatchEngine, CliError> {
    let Some(config_path) = path else {
        return Ok(MatchEngine::with_defaults());
    };
    let file = open_utf8_file(config_path).map_err(|source| CliError::OpenInput {
        field: ARG_CONFIG,
        path: config_path.to_path_buf(),
        source,
    })?;
    let config =
        ScoringConfig::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseConfig {
                path: config_path.to_path_buf(),
                source,
            }
        })?;
    MatchEngine::new(&config).map_err(|source| CliError::InvalidConfig {
        path: config_path.to_path_buf(),
        source,
    })
}
