//! Configuration management for pagemap.
//!
//! Parses `pagemap.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path strings support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.source_dir`
//! - `locales[].file`

mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override page-map source directory.
    pub source_dir: Option<PathBuf>,
    /// Override default (fallback) locale.
    pub default_locale: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pagemap.toml";

/// Page-map file extensions the loader understands.
const PAGE_MAP_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Locale list as written in TOML.
    locales: Vec<LocaleConfigRaw>,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Resolved locales in declaration order (set after loading).
    #[serde(skip)]
    pub locales_resolved: Vec<LocaleSource>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct SiteConfigRaw {
    default_locale: String,
    source_dir: Option<String>,
}

impl Default for SiteConfigRaw {
    fn default() -> Self {
        Self {
            default_locale: "en".to_owned(),
            source_dir: None,
        }
    }
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Locale used when a page is missing from the requested locale.
    pub default_locale: String,
    /// Directory holding page-map files.
    pub source_dir: PathBuf,
}

/// Raw locale entry as parsed from TOML.
#[derive(Debug, Deserialize)]
struct LocaleConfigRaw {
    locale: String,
    name: Option<String>,
    file: Option<String>,
}

/// One configured locale and where its page map lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleSource {
    /// Locale identifier.
    pub locale: String,
    /// Display name for the locale switcher.
    pub name: String,
    /// Page-map file, relative to the source directory unless absolute.
    pub file: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.source_dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pagemap.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated after overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Full path of a locale's page-map file.
    #[must_use]
    pub fn page_map_path(&self, source: &LocaleSource) -> PathBuf {
        self.site_resolved.source_dir.join(&source.file)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_locales()?;
        self.validate_default_locale()?;
        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.site_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(default_locale) = &settings.default_locale {
            self.site_resolved.default_locale.clone_from(default_locale);
        }
    }

    /// Validate locale entries.
    fn validate_locales(&self) -> Result<(), ConfigError> {
        if self.locales_resolved.is_empty() {
            return Err(ConfigError::Validation(
                "at least one locale must be configured".to_owned(),
            ));
        }

        let mut seen = HashSet::new();
        for source in &self.locales_resolved {
            if source.locale.is_empty() {
                return Err(ConfigError::Validation(
                    "locales.locale cannot be empty".to_owned(),
                ));
            }
            if !seen.insert(source.locale.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "locale '{}' is configured more than once",
                    source.locale
                )));
            }

            let extension = source.file.extension().and_then(|e| e.to_str());
            if !extension.is_some_and(|e| PAGE_MAP_EXTENSIONS.contains(&e)) {
                return Err(ConfigError::Validation(format!(
                    "page map for locale '{}' must be a .json, .yaml or .yml file: {}",
                    source.locale,
                    source.file.display()
                )));
            }
        }

        Ok(())
    }

    /// Validate that the default locale is one of the configured locales.
    fn validate_default_locale(&self) -> Result<(), ConfigError> {
        let default_locale = &self.site_resolved.default_locale;
        if default_locale.is_empty() {
            return Err(ConfigError::Validation(
                "site.default_locale cannot be empty".to_owned(),
            ));
        }
        if !self
            .locales_resolved
            .iter()
            .any(|source| &source.locale == default_locale)
        {
            return Err(ConfigError::Validation(format!(
                "site.default_locale '{default_locale}' is not a configured locale"
            )));
        }
        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let site = SiteConfigRaw::default();
        let locales_resolved = vec![default_locale_source(&site.default_locale)];
        Self {
            site_resolved: SiteConfig {
                default_locale: site.default_locale.clone(),
                source_dir: base.join("pagemaps"),
            },
            site,
            locales: Vec::new(),
            locales_resolved,
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variables and resolve paths against the config
    /// directory.
    ///
    /// An empty locale list becomes a single entry for the default locale.
    fn resolve(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let source_dir = match &self.site.source_dir {
            Some(dir) => expand::expand_env(dir, "site.source_dir")?,
            None => "pagemaps".to_owned(),
        };

        self.site_resolved = SiteConfig {
            default_locale: self.site.default_locale.clone(),
            source_dir: config_dir.join(source_dir),
        };

        self.locales_resolved = if self.locales.is_empty() {
            vec![default_locale_source(&self.site.default_locale)]
        } else {
            self.locales
                .iter()
                .map(|raw| -> Result<LocaleSource, ConfigError> {
                    let file = match &raw.file {
                        Some(file) => PathBuf::from(expand::expand_env(file, "locales.file")?),
                        None => default_page_map_file(&raw.locale),
                    };
                    Ok(LocaleSource {
                        locale: raw.locale.clone(),
                        name: raw.name.clone().unwrap_or_else(|| raw.locale.clone()),
                        file,
                    })
                })
                .collect::<Result<_, _>>()?
        };

        Ok(())
    }
}

fn default_locale_source(locale: &str) -> LocaleSource {
    LocaleSource {
        locale: locale.to_owned(),
        name: locale.to_owned(),
        file: default_page_map_file(locale),
    }
}

fn default_page_map_file(locale: &str) -> PathBuf {
    PathBuf::from(format!("{locale}.json"))
}
