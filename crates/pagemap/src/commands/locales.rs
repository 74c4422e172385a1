//! `pagemap locales` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::loader::load_resolver;
use crate::output::Output;

/// Arguments for the locales command.
#[derive(Args)]
pub(crate) struct LocalesArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl LocalesArgs {
    /// Execute the locales command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let resolver = load_resolver(&config)?;

        for info in resolver.locales() {
            let marker = if info.locale == resolver.default_locale() {
                " (default)"
            } else {
                ""
            };
            output.data(&format!("{}\t{}{marker}", info.locale, info.name));
        }
        Ok(())
    }
}
