//! CLI error types.

use scribe_config::ConfigError;
use scribe_substack::{PublishError, SubstackError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Substack(#[from] SubstackError),

    #[error("{0}")]
    Publish(#[from] PublishError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid metadata file: {0}")]
    Metadata(#[from] toml::de::Error),

    #[error("{0}")]
    Validation(String),
}
