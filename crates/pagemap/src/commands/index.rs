//! `pagemap index` command implementation.

use std::collections::BTreeMap;

use clap::Args;
use pagemap_locale::ResolveError;

use super::ConfigArgs;
use crate::error::CliError;
use crate::loader::load_resolver;
use crate::output::Output;

/// Arguments for the index command.
#[derive(Args)]
pub(crate) struct IndexArgs {
    /// Only index this locale.
    #[arg(short, long)]
    locale: Option<String>,

    #[command(flatten)]
    config: ConfigArgs,
}

impl IndexArgs {
    /// Execute the index command.
    ///
    /// Prints a JSON object mapping each locale to its search entries.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or `--locale` is not configured.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let resolver = load_resolver(&config)?;

        let locales = match &self.locale {
            Some(locale) if !resolver.is_registered(locale) => {
                return Err(ResolveError::UnknownLocale {
                    locale: locale.clone(),
                    default_locale: resolver.default_locale().to_owned(),
                }
                .into());
            }
            Some(locale) => vec![locale.as_str()],
            None => resolver.available_locales(),
        };

        let index: BTreeMap<_, _> = locales
            .into_iter()
            .filter_map(|locale| Some((locale, resolver.tree(locale)?.search_index())))
            .collect();

        output.json(&index)?;
        Ok(())
    }
}
