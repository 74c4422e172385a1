//! Navigation tree model for multilingual documentation sites.
//!
//! This crate provides:
//! - [`RawEntry`] / [`RawNode`]: the declarative page map as supplied by a
//!   content loader
//! - [`NavTree`]: a validated, immutable tree for one locale with O(1)
//!   route lookups, ancestor chains, siblings and reading order
//! - [`NavItem`] and [`SearchEntry`]: views for sidebar rendering and
//!   search indexing
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pagemap_tree::{LocaleInfo, NavTree};
//!
//! let tree = NavTree::from_json(
//!     LocaleInfo::new("en", "English"),
//!     r#"[
//!         {"data": {}},
//!         {"name": "intro", "route": "/", "title": "Intro"},
//!         {"name": "guides", "title": "Guides", "children": [
//!             {"name": "create-a-store", "route": "/guides/create-a-store", "title": "Create a store"}
//!         ]}
//!     ]"#,
//! )?;
//!
//! let chain = tree.ancestor_chain("/guides/create-a-store")?;
//! assert_eq!(chain.len(), 2);
//! # Ok(())
//! # }
//! ```

mod error;
mod nav;
mod raw;
mod route;
mod search;
mod tree;

pub use error::{RouteNotFound, ValidationError};
pub use nav::NavItem;
pub use raw::{FrontMatter, MetaEntry, RawEntry, RawNode};
pub use route::RouteIssue;
pub use search::SearchEntry;
pub use tree::{Flatten, LocaleInfo, NavTree, Neighbors, NodeId, PageNode, Siblings};
