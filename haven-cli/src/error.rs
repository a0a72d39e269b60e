//! Error types emitted by the Haven CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use haven_core::ConfigurationError;
use haven_scorer::{ConfigLoadError, MatchError};
use thiserror::Error;

/// Errors emitted by the Haven CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// An input file could not be opened.
    #[error("failed to open {field} file {path:?}: {source}")]
    OpenInput {
        /// Option the path came from.
        field: &'static str,
        /// Requested path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// An input file is not valid JSON of the expected shape.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        /// Option the path came from.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The scoring configuration file could not be parsed.
    #[error("scoring configuration {path:?}: {source}")]
    ParseConfig {
        /// Configuration path.
        path: Utf8PathBuf,
        /// Parse failure.
        #[source]
        source: ConfigLoadError,
    },
    /// The scoring configuration parsed but failed validation.
    #[error("invalid scoring configuration at {path:?}: {source}")]
    InvalidConfig {
        /// Configuration path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: ConfigurationError,
    },
    /// Scoring failed, e.g. the preferences hold an unmapped value.
    #[error("matching failed: {source}")]
    Match {
        /// Engine failure.
        #[from]
        source: MatchError,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
