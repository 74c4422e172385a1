//! Loads configured page maps from disk into a [`LocaleResolver`].

use std::path::Path;

use pagemap_config::{Config, LocaleSource};
use pagemap_locale::{LocaleResolver, RegisterError};
use pagemap_tree::{LocaleInfo, NavTree};

use crate::error::CliError;

/// Page-map serialization, picked by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read and validate the page map for one locale.
pub(crate) fn load_tree(config: &Config, source: &LocaleSource) -> Result<NavTree, CliError> {
    let path = config.page_map_path(source);
    let content = std::fs::read_to_string(&path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;

    let info = LocaleInfo::new(&source.locale, &source.name);
    let tree = match Format::from_path(&path) {
        Format::Json => NavTree::from_json(info, &content),
        Format::Yaml => NavTree::from_yaml(info, &content),
    }
    .map_err(|e| RegisterError::Validation {
        locale: source.locale.clone(),
        source: e,
    })?;

    tracing::debug!(
        locale = %source.locale,
        path = %path.display(),
        nodes = tree.len(),
        "Loaded page map"
    );

    Ok(tree)
}

/// Load every configured locale, in configuration order.
///
/// Stops at the first locale that fails to load or validate.
pub(crate) fn load_resolver(config: &Config) -> Result<LocaleResolver, CliError> {
    let mut resolver = LocaleResolver::new(&config.site_resolved.default_locale);
    for source in &config.locales_resolved {
        resolver.register(load_tree(config, source)?)?;
    }
    Ok(resolver)
}
