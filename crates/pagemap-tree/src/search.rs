//! Search index entries.
//!
//! The search collaborator indexes every routed page by title and route.
//! Groups are not indexed, but their titles appear in `section` so results
//! can show where a page lives.

use serde::Serialize;

use crate::raw::FrontMatter;
use crate::tree::NavTree;

/// One indexable page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry<'a> {
    /// Page route.
    pub route: &'a str,
    /// Page title.
    pub title: &'a str,
    /// Titles of the page's ancestors, root first.
    pub section: Vec<&'a str>,
    /// Page metadata as authored.
    pub front_matter: &'a FrontMatter,
}

impl NavTree {
    /// Flatten the tree into search entries in pre-order.
    #[must_use]
    pub fn search_index(&self) -> Vec<SearchEntry<'_>> {
        self.iter()
            .filter_map(|(id, node)| {
                let route = node.route.as_deref()?;
                let mut ancestors = self.ancestor_ids(id);
                ancestors.pop();
                let section = ancestors
                    .into_iter()
                    .map(|i| self.node(i).title.as_str())
                    .filter(|title| !title.is_empty())
                    .collect();

                Some(SearchEntry {
                    route,
                    title: &node.title,
                    section,
                    front_matter: &node.front_matter,
                })
            })
            .collect()
    }
}
