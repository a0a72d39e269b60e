//! Error types raised while configuring or running the match engine.
#![forbid(unsafe_code)]

use haven_core::{ConfigurationError, ProfileError};
use thiserror::Error;

/// Errors raised while loading a scoring configuration document.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The document is not valid JSON or has unknown fields.
    #[error("failed to parse scoring configuration: {source}")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed but describes unusable tables.
    #[error("invalid scoring configuration: {source}")]
    Invalid {
        /// Validation failure.
        #[source]
        source: ConfigurationError,
    },
}

impl From<ConfigurationError> for ConfigLoadError {
    fn from(source: ConfigurationError) -> Self {
        Self::Invalid { source }
    }
}

/// Errors raised while scoring raw profiles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The preference profile could not be normalized; nothing can be scored.
    #[error("invalid preferences: {source}")]
    Preferences {
        /// Normalization failure.
        #[source]
        source: ProfileError,
    },
    /// The town record could not be normalized.
    #[error("invalid town record '{town_id}': {source}")]
    Town {
        /// Identifier of the rejected town.
        town_id: String,
        /// Normalization failure.
        #[source]
        source: ProfileError,
    },
}
