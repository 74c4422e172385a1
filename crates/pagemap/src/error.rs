//! CLI error types.

use std::path::PathBuf;

use pagemap_config::ConfigError;
use pagemap_locale::{RegisterError, ResolveError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Register(#[from] RegisterError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
