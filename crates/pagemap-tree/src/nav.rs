//! Sidebar render tree.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::tree::{NavTree, NodeId};

/// Navigation item with children for the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Machine identifier.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Link target, `None` for groups.
    pub route: Option<String>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavTree {
    /// Build the sidebar tree. Groups are included.
    #[must_use]
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.roots().iter().map(|&id| self.nav_item(id)).collect()
    }

    fn nav_item(&self, id: NodeId) -> NavItem {
        let node = self.node(id);
        NavItem {
            name: node.name.clone(),
            title: node.title.clone(),
            route: node.route.clone(),
            children: self
                .children(id)
                .iter()
                .map(|&child| self.nav_item(child))
                .collect(),
        }
    }
}

impl Serialize for NavTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NavTree", 3)?;
        state.serialize_field("locale", &self.locale().locale)?;
        state.serialize_field("name", &self.locale().name)?;
        state.serialize_field("items", &self.nav_items())?;
        state.end()
    }
}
