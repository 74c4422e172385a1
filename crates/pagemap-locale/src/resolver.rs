//! Locale table and request resolution.
//!
//! # Resolution
//!
//! Each [`LocaleResolver::resolve`] call walks the same states and keeps
//! nothing between calls:
//!
//! ```text
//! Start -> LocaleLookup -+-> RouteFoundInLocale                      (Found)
//!                        +-> RouteMissingInLocale -> DefaultLocaleLookup
//!                                                  +-> RouteFoundInDefault    (Fallback)
//!                                                  +-> RouteMissingEverywhere (NotFound)
//! unregistered locale -> UnknownLocale
//! ```
//!
//! The requesting locale's tree is never modified by a fallback.

use std::collections::HashMap;

use pagemap_tree::{LocaleInfo, NavTree, RawEntry};

use crate::context::{NavigationContext, Resolution};
use crate::error::{RegisterError, ResolveError};

/// Registered navigation trees keyed by locale.
///
/// Populate with [`register`](Self::register) at startup, then share
/// read-only (see [`NavStore`](crate::NavStore) for hot reload).
#[derive(Debug)]
pub struct LocaleResolver {
    default_locale: String,
    trees: Vec<NavTree>,
    index: HashMap<String, usize>,
}

impl LocaleResolver {
    /// Create an empty resolver that falls back to `default_locale`.
    #[must_use]
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            trees: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Locale used for fallback.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Add a locale's tree.
    ///
    /// The locale identifier is taken from the tree. Registering the same
    /// locale twice is an error; trees are never merged or overwritten.
    pub fn register(&mut self, tree: NavTree) -> Result<(), RegisterError> {
        let locale = tree.locale().locale.clone();
        if self.index.contains_key(&locale) {
            return Err(RegisterError::DuplicateLocaleRegistration(locale));
        }

        tracing::info!(
            locale = %locale,
            pages = tree.routes().count(),
            "Registered navigation tree"
        );

        self.index.insert(locale, self.trees.len());
        self.trees.push(tree);
        Ok(())
    }

    /// Build a tree from raw entries and register it.
    pub fn register_raw(
        &mut self,
        locale: LocaleInfo,
        entries: Vec<RawEntry>,
    ) -> Result<(), RegisterError> {
        if self.index.contains_key(&locale.locale) {
            return Err(RegisterError::DuplicateLocaleRegistration(locale.locale));
        }
        let id = locale.locale.clone();
        let tree = NavTree::build(locale, entries)
            .map_err(|source| RegisterError::Validation { locale: id, source })?;
        self.register(tree)
    }

    /// Tree registered for `locale`.
    #[must_use]
    pub fn tree(&self, locale: &str) -> Option<&NavTree> {
        self.index.get(locale).map(|&i| &self.trees[i])
    }

    /// True if `locale` has a registered tree.
    #[must_use]
    pub fn is_registered(&self, locale: &str) -> bool {
        self.index.contains_key(locale)
    }

    /// Registered locale identifiers in registration order.
    #[must_use]
    pub fn available_locales(&self) -> Vec<&str> {
        self.trees
            .iter()
            .map(|tree| tree.locale().locale.as_str())
            .collect()
    }

    /// Registered locales with display names, in registration order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleInfo> {
        self.trees.iter().map(NavTree::locale)
    }

    /// Resolve a request into a navigation context.
    ///
    /// Falls back to the default locale when the requested locale lacks the
    /// route; the result is then [`Resolution::Fallback`] with
    /// `translation_available` unset.
    pub fn resolve(&self, locale: &str, route: &str) -> Result<Resolution<'_>, ResolveError> {
        let Some(tree) = self.tree(locale) else {
            tracing::debug!(locale, route, "Unknown locale");
            return Err(ResolveError::UnknownLocale {
                locale: locale.to_owned(),
                default_locale: self.default_locale.clone(),
            });
        };
        let requested = tree.locale().locale.as_str();

        if let Some(ctx) = NavigationContext::build(requested, tree, route, true) {
            tracing::debug!(locale, route, "Route found in locale");
            return Ok(Resolution::Found(ctx));
        }

        let fallback = self
            .tree(&self.default_locale)
            .filter(|_| locale != self.default_locale)
            .and_then(|default_tree| {
                NavigationContext::build(requested, default_tree, route, false)
            });

        match fallback {
            Some(ctx) => {
                tracing::debug!(
                    locale,
                    route,
                    default_locale = %self.default_locale,
                    "Route found in default locale"
                );
                Ok(Resolution::Fallback(ctx))
            }
            None => {
                tracing::debug!(locale, route, "Route missing in every locale");
                Err(ResolveError::NotFound {
                    locale: locale.to_owned(),
                    route: route.to_owned(),
                })
            }
        }
    }

    /// Locales whose tree contains `route`, in registration order.
    #[must_use]
    pub fn locales_with_route(&self, route: &str) -> Vec<&str> {
        self.trees
            .iter()
            .filter(|tree| tree.contains_route(route))
            .map(|tree| tree.locale().locale.as_str())
            .collect()
    }

    /// Routes of the default locale that `locale` does not have, in the
    /// default tree's reading order.
    ///
    /// Empty when the default locale is not registered.
    pub fn missing_translations(&self, locale: &str) -> Result<Vec<&str>, ResolveError> {
        let tree = self.require(locale)?;
        let Some(default_tree) = self.tree(&self.default_locale) else {
            return Ok(Vec::new());
        };

        Ok(default_tree
            .routes()
            .filter(|route| !tree.contains_route(route))
            .collect())
    }

    /// Routes of `locale` that the default locale does not have.
    ///
    /// Empty when the default locale is not registered.
    pub fn extra_routes(&self, locale: &str) -> Result<Vec<&str>, ResolveError> {
        let tree = self.require(locale)?;
        let Some(default_tree) = self.tree(&self.default_locale) else {
            return Ok(Vec::new());
        };

        Ok(tree
            .routes()
            .filter(|route| !default_tree.contains_route(route))
            .collect())
    }

    fn require(&self, locale: &str) -> Result<&NavTree, ResolveError> {
        self.tree(locale).ok_or_else(|| ResolveError::UnknownLocale {
            locale: locale.to_owned(),
            default_locale: self.default_locale.clone(),
        })
    }
}
