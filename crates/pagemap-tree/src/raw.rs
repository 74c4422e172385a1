//! Raw page-map input.
//!
//! These types mirror the declarative page map handed over by the content
//! loader, one list per locale. They are plain serde data with no invariants;
//! [`NavTree::build`](crate::NavTree::build) turns them into a validated tree.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Opaque page-level metadata, passed through unchanged.
pub type FrontMatter = serde_json::Map<String, serde_json::Value>;

/// One element of a raw page map.
///
/// A map whose only key is `data` is a meta entry; anything else must be a
/// node. Node errors keep serde's own message, prefixed with the names of
/// the enclosing nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawEntry {
    /// Framework meta entry such as `{ "data": {} }`. Never becomes a node.
    Meta(MetaEntry),
    /// Page or group description.
    Node(RawNode),
}

impl RawEntry {
    /// Returns the node description, or `None` for meta entries.
    #[must_use]
    pub fn as_node(&self) -> Option<&RawNode> {
        match self {
            Self::Node(node) => Some(node),
            Self::Meta(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for RawEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = serde_json::Map::<String, Value>::deserialize(deserializer)?;

        if map.len() == 1
            && let Some(data) = map.remove("data")
        {
            return Ok(Self::Meta(MetaEntry { data }));
        }

        let name = map.get("name").and_then(Value::as_str).map(str::to_owned);
        RawNode::deserialize(Value::Object(map))
            .map(Self::Node)
            .map_err(|e| match name {
                Some(name) => D::Error::custom(format_args!("in node '{name}': {e}")),
                None => D::Error::custom(e),
            })
    }
}

impl From<RawNode> for RawEntry {
    fn from(node: RawNode) -> Self {
        Self::Node(node)
    }
}

/// Meta entry carried alongside nodes in a page map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetaEntry {
    /// Framework-specific payload.
    pub data: serde_json::Value,
}

/// Nested node description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    /// Machine identifier, unique among siblings.
    pub name: String,
    /// Display title for the locale.
    #[serde(default)]
    pub title: String,
    /// Absolute route, or `None` for a group.
    #[serde(default)]
    pub route: Option<String>,
    /// Page-level metadata.
    #[serde(default)]
    pub front_matter: FrontMatter,
    /// Child entries in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawEntry>,
}

impl RawNode {
    /// Describe a routed page without children.
    #[must_use]
    pub fn page(name: impl Into<String>, title: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            route: Some(route.into()),
            ..Self::default()
        }
    }

    /// Describe a group (no route) holding `children`.
    #[must_use]
    pub fn group(
        name: impl Into<String>,
        title: impl Into<String>,
        children: impl IntoIterator<Item = RawNode>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            route: None,
            front_matter: FrontMatter::new(),
            children: children.into_iter().map(RawEntry::Node).collect(),
        }
    }

    /// Replace the children of this node.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = RawNode>) -> Self {
        self.children = children.into_iter().map(RawEntry::Node).collect();
        self
    }

    /// Replace the front matter of this node.
    #[must_use]
    pub fn with_front_matter(mut self, front_matter: FrontMatter) -> Self {
        self.front_matter = front_matter;
        self
    }
}
