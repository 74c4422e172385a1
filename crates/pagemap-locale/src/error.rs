//! Error types for locale registration and resolution.

use pagemap_tree::ValidationError;

/// Error returned when a tree cannot be registered.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// A tree for this locale is already registered.
    #[error("Locale '{0}' is already registered")]
    DuplicateLocaleRegistration(String),
    /// The page map failed validation.
    #[error("Invalid page map for locale '{locale}': {source}")]
    Validation {
        /// Locale whose page map was rejected.
        locale: String,
        /// Underlying validation failure.
        #[source]
        source: ValidationError,
    },
}

/// Error returned when a request cannot be resolved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The requested locale has no registered tree.
    #[error("Unknown locale '{locale}'")]
    UnknownLocale {
        /// Requested locale.
        locale: String,
        /// Locale to redirect to.
        default_locale: String,
    },
    /// The route exists neither in the requested nor in the default locale.
    #[error("Route '{route}' not found in locale '{locale}'")]
    NotFound {
        /// Requested locale.
        locale: String,
        /// Requested route.
        route: String,
    },
}
