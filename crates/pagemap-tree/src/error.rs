//! Error types for tree construction and lookup.

use crate::route::RouteIssue;

/// Error returned when a page map violates a tree invariant.
///
/// Paths are slash-joined node names from the root (e.g. `guides/create-a-store`).
/// An unnamed node is shown by its position, e.g. `guides/[2]`.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Locale identifier is empty.
    #[error("Locale identifier cannot be empty")]
    EmptyLocale,
    /// Node has an empty name.
    #[error("Node at {path} has an empty name")]
    EmptyName {
        /// Position of the offending node.
        path: String,
    },
    /// Two siblings share a name.
    #[error("Duplicate name '{name}' at {path}")]
    DuplicateName {
        /// Path of the second node with this name.
        path: String,
        /// The repeated name.
        name: String,
    },
    /// Two nodes share a route.
    #[error("Duplicate route '{route}' at {path} (already used by {first})")]
    DuplicateRoute {
        /// Path of the node that repeats the route.
        path: String,
        /// The repeated route.
        route: String,
        /// Path of the node that declared the route first.
        first: String,
    },
    /// Group without children.
    #[error("Group {path} has no route and no children")]
    EmptyGroup {
        /// Path of the empty group.
        path: String,
    },
    /// Route string is not absolute or not normalized.
    #[error("Malformed route '{route}' at {path}: {issue}")]
    MalformedRoute {
        /// Path of the offending node.
        path: String,
        /// The rejected route.
        route: String,
        /// What is wrong with it.
        issue: RouteIssue,
    },
    /// Page map JSON could not be parsed.
    #[error("Invalid page map JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Page map YAML could not be parsed.
    #[error("Invalid page map YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ValidationError {
    /// Path of the offending node, if the error concerns a single node.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::EmptyName { path }
            | Self::DuplicateName { path, .. }
            | Self::DuplicateRoute { path, .. }
            | Self::EmptyGroup { path }
            | Self::MalformedRoute { path, .. } => Some(path),
            Self::EmptyLocale | Self::Json(_) | Self::Yaml(_) => None,
        }
    }
}

/// Error returned when a route is not part of a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Route not found: {0}")]
pub struct RouteNotFound(pub String);
