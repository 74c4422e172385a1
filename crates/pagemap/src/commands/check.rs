//! `pagemap check` command implementation.

use clap::Args;
use pagemap_locale::LocaleResolver;

use super::ConfigArgs;
use crate::error::CliError;
use crate::loader::load_tree;
use crate::output::{Output, Tone};

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Treat missing translations as errors.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Every locale is validated even if an earlier one fails, so a single
    /// run reports all broken page maps.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, any page map is invalid, or
    /// `--strict` is set and a locale lags behind the default locale.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let strict = self.strict;
        let config = self.config.load()?;

        let mut resolver = LocaleResolver::new(&config.site_resolved.default_locale);
        let mut failures = 0usize;

        for source in &config.locales_resolved {
            match load_tree(&config, source).and_then(|tree| {
                let pages = tree.routes().count();
                resolver.register(tree)?;
                Ok(pages)
            }) {
                Ok(pages) => output.line(
                    Tone::Success,
                    &format!("{} ({}): {pages} pages", source.locale, source.name),
                ),
                Err(e) => {
                    output.error(&format!("{}: {e}", source.locale));
                    failures += 1;
                }
            }
        }

        if failures > 0 {
            return Err(CliError::Validation(format!(
                "{failures} page map(s) failed validation"
            )));
        }

        let mut lagging = 0usize;
        for locale in resolver.available_locales() {
            if locale == resolver.default_locale() {
                continue;
            }
            let missing = resolver.missing_translations(locale)?;
            let extra = resolver.extra_routes(locale)?;

            if !missing.is_empty() {
                lagging += 1;
                output.warning(&format!(
                    "{locale}: {} page(s) missing, served from '{}':",
                    missing.len(),
                    resolver.default_locale()
                ));
                for route in missing {
                    output.info(&format!("  {route}"));
                }
            }
            if !extra.is_empty() {
                output.warning(&format!(
                    "{locale}: {} page(s) not in '{}':",
                    extra.len(),
                    resolver.default_locale()
                ));
                for route in extra {
                    output.info(&format!("  {route}"));
                }
            }
        }

        if strict && lagging > 0 {
            return Err(CliError::Validation(format!(
                "{lagging} locale(s) have missing translations"
            )));
        }

        output.line(Tone::Highlight, "All page maps are valid");
        Ok(())
    }
}
