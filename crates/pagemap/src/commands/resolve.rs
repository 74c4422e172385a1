//! `pagemap resolve` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::loader::load_resolver;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Requested locale (e.g. `ko`).
    locale: String,

    /// Requested route (e.g. `/guides/create-a-store`).
    route: String,

    #[command(flatten)]
    config: ConfigArgs,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// Prints the navigation context as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, the locale is unknown, or the
    /// route exists in no locale.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let resolver = load_resolver(&config)?;

        let resolution = resolver.resolve(&self.locale, &self.route)?;
        if resolution.is_fallback() {
            output.warning(&format!(
                "'{}' is not translated to '{}', serving '{}'",
                self.route,
                self.locale,
                resolution.context().locale
            ));
        }

        output.json(resolution.context())?;
        Ok(())
    }
}
