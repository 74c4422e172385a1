//! Resolved navigation context handed to the rendering layer.

use pagemap_tree::{NavTree, Neighbors, PageNode, Siblings};
use serde::Serialize;

/// Everything the rendering layer needs to draw navigation for one page.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationContext<'a> {
    /// Locale the request asked for.
    pub requested_locale: &'a str,
    /// Locale whose tree the route was resolved in.
    pub locale: &'a str,
    /// Full tree for the sidebar.
    pub tree: &'a NavTree,
    /// The page being shown.
    pub active: &'a PageNode,
    /// Root down to the active page, inclusive.
    pub ancestors: Vec<&'a PageNode>,
    /// Siblings of the active page and its position among them.
    pub siblings: Siblings<'a>,
    /// Previous and next pages in reading order.
    pub neighbors: Neighbors<'a>,
    /// False when content is served from the default locale.
    pub translation_available: bool,
}

impl<'a> NavigationContext<'a> {
    /// Build a context for `route` in `tree`.
    ///
    /// Returns `None` if the route is not in the tree.
    pub(crate) fn build(
        requested_locale: &'a str,
        tree: &'a NavTree,
        route: &str,
        translation_available: bool,
    ) -> Option<Self> {
        let active = tree.find_by_route(route).ok()?;
        let ancestors = tree.ancestor_chain(route).ok()?;
        let siblings = tree.siblings_of(route).ok()?;
        let neighbors = tree.neighbors(route).ok()?;

        Some(Self {
            requested_locale,
            locale: &tree.locale().locale,
            tree,
            active,
            ancestors,
            siblings,
            neighbors,
            translation_available,
        })
    }
}

/// Outcome of a successful resolve.
#[derive(Clone, Debug)]
pub enum Resolution<'a> {
    /// Route found in the requested locale.
    Found(NavigationContext<'a>),
    /// Route served from the default locale because the requested locale
    /// lacks it.
    Fallback(NavigationContext<'a>),
}

impl<'a> Resolution<'a> {
    /// True if content comes from the default locale.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Borrow the context.
    #[must_use]
    pub fn context(&self) -> &NavigationContext<'a> {
        match self {
            Self::Found(ctx) | Self::Fallback(ctx) => ctx,
        }
    }

    /// Take the context.
    #[must_use]
    pub fn into_context(self) -> NavigationContext<'a> {
        match self {
            Self::Found(ctx) | Self::Fallback(ctx) => ctx,
        }
    }
}
