//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod index;
pub(crate) mod locales;
pub(crate) mod resolve;

use std::path::PathBuf;

use clap::Args;
use pagemap_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use index::IndexArgs;
pub(crate) use locales::LocalesArgs;
pub(crate) use resolve::ResolveArgs;

/// Configuration arguments shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover pagemap.toml).
    #[arg(short, long, env = "PAGEMAP_CONFIG")]
    config: Option<PathBuf>,

    /// Page-map source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Fallback locale (overrides config).
    #[arg(long)]
    default_locale: Option<String>,
}

impl ConfigArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load(self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            default_locale: self.default_locale,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
