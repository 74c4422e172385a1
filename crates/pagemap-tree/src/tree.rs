//! Navigation tree for one locale.
//!
//! # Architecture
//!
//! Nodes are stored in a flat `Vec<PageNode>` with parent/children
//! relationships tracked by [`NodeId`] indices. The builder pushes nodes
//! in depth-first pre-order, so storage order is also the flatten order.
//! This provides:
//! - O(1) route lookups via the `route_index` `HashMap`
//! - O(d) ancestor chains where d is the node depth
//! - O(1) previous/next page lookups via the precomputed page order

use std::collections::{HashMap, HashSet};
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::error::{RouteNotFound, ValidationError};
use crate::raw::{FrontMatter, RawEntry, RawNode};
use crate::route::check_route;

/// Locale identifier and its display name (e.g. `ko` / `한국어`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleInfo {
    /// Locale identifier used in routes and lookups.
    pub locale: String,
    /// Label shown in a locale switcher.
    pub name: String,
}

impl LocaleInfo {
    /// Create locale info from an identifier and display name.
    #[must_use]
    pub fn new(locale: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            name: name.into(),
        }
    }
}

/// Index of a node within its [`NavTree`].
///
/// Only meaningful for the tree that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in flatten order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One page or group in a navigation tree.
///
/// Children and parent are held by the owning [`NavTree`] and reached via
/// [`NavTree::children`] and [`NavTree::parent`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNode {
    /// Machine identifier, unique among siblings.
    pub name: String,
    /// Display title for the tree's locale.
    pub title: String,
    /// Absolute route, `None` for groups.
    pub route: Option<String>,
    /// Page-level metadata, passed through unchanged.
    pub front_matter: FrontMatter,
}

impl PageNode {
    /// True if this node is a non-navigable group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.route.is_none()
    }
}

/// Siblings of a node in authored order.
#[derive(Clone, Debug, Serialize)]
pub struct Siblings<'a> {
    /// All children of the node's parent (or all root nodes).
    pub nodes: Vec<&'a PageNode>,
    /// Position of the node within `nodes`.
    pub index: usize,
}

impl<'a> Siblings<'a> {
    /// The node the siblings were computed for.
    #[must_use]
    pub fn current(&self) -> &'a PageNode {
        self.nodes[self.index]
    }

    /// Sibling authored directly before the node.
    #[must_use]
    pub fn before(&self) -> Option<&'a PageNode> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.nodes.get(i).copied())
    }

    /// Sibling authored directly after the node.
    #[must_use]
    pub fn after(&self) -> Option<&'a PageNode> {
        self.nodes.get(self.index + 1).copied()
    }
}

/// Previous and next pages in linear reading order.
///
/// Groups never appear here.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Neighbors<'a> {
    /// Page read before the current one.
    pub previous: Option<&'a PageNode>,
    /// Page read after the current one.
    pub next: Option<&'a PageNode>,
}

/// Validated navigation tree for one locale.
///
/// Immutable after construction; rebuild it wholesale when the source
/// changes.
#[derive(Debug)]
pub struct NavTree {
    locale: LocaleInfo,
    nodes: Vec<PageNode>,
    children: Vec<Vec<NodeId>>,
    parents: Vec<Option<NodeId>>,
    roots: Vec<NodeId>,
    route_index: HashMap<String, NodeId>,
    /// Routed nodes in pre-order.
    page_order: Vec<NodeId>,
    /// Position of each node in `page_order`, `None` for groups.
    page_rank: Vec<Option<usize>>,
}

impl NavTree {
    /// Build a tree from raw page-map entries.
    ///
    /// Checks every invariant in a single traversal and stops at the first
    /// violation. Meta entries are skipped.
    pub fn build(locale: LocaleInfo, entries: Vec<RawEntry>) -> Result<Self, ValidationError> {
        if locale.locale.is_empty() {
            return Err(ValidationError::EmptyLocale);
        }

        let mut builder = TreeBuilder::default();
        builder.add_entries(entries, None, "")?;
        let tree = builder.finish(locale);

        tracing::debug!(
            locale = %tree.locale.locale,
            nodes = tree.nodes.len(),
            pages = tree.page_order.len(),
            "Built navigation tree"
        );

        Ok(tree)
    }

    /// Parse a JSON page map and build a tree from it.
    pub fn from_json(locale: LocaleInfo, json: &str) -> Result<Self, ValidationError> {
        let entries: Vec<RawEntry> = serde_json::from_str(json)?;
        Self::build(locale, entries)
    }

    /// Parse a YAML page map and build a tree from it.
    pub fn from_yaml(locale: LocaleInfo, yaml: &str) -> Result<Self, ValidationError> {
        let entries: Vec<RawEntry> = serde_yaml::from_str(yaml)?;
        Self::build(locale, entries)
    }

    /// Locale this tree belongs to.
    #[must_use]
    pub fn locale(&self) -> &LocaleInfo {
        &self.locale
    }

    /// Number of nodes, groups included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was produced by a different tree with more nodes.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &PageNode {
        &self.nodes[id.0]
    }

    /// Root-level nodes in authored order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children of a node in authored order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.0]
    }

    /// Parent of a node, `None` for root-level nodes.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.0]
    }

    /// Resolve a route to its node id.
    #[must_use]
    pub fn lookup(&self, route: &str) -> Option<NodeId> {
        self.route_index.get(route).copied()
    }

    /// True if a page with this route exists.
    #[must_use]
    pub fn contains_route(&self, route: &str) -> bool {
        self.route_index.contains_key(route)
    }

    /// Get the node with exactly this route.
    pub fn find_by_route(&self, route: &str) -> Result<&PageNode, RouteNotFound> {
        self.require(route).map(|id| self.node(id))
    }

    /// Nodes from the root down to the node with `route`, inclusive.
    ///
    /// Groups on the way are included.
    pub fn ancestor_chain(&self, route: &str) -> Result<Vec<&PageNode>, RouteNotFound> {
        let id = self.require(route)?;
        Ok(self.ancestor_ids(id).into_iter().map(|i| self.node(i)).collect())
    }

    /// Ids from the root down to `id`, inclusive.
    #[must_use]
    pub fn ancestor_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(i) = current {
            chain.push(i);
            current = self.parents[i.0];
        }
        chain.reverse();
        chain
    }

    /// Siblings of the node with `route`, in authored order, and its index.
    pub fn siblings_of(&self, route: &str) -> Result<Siblings<'_>, RouteNotFound> {
        let id = self.require(route)?;
        let level = match self.parents[id.0] {
            Some(parent) => &self.children[parent.0],
            None => &self.roots,
        };
        // The node is always among its parent's children.
        let index = level.iter().position(|&i| i == id).unwrap_or_default();

        Ok(Siblings {
            nodes: level.iter().map(|&i| self.node(i)).collect(),
            index,
        })
    }

    /// Previous and next pages around `route` in linear reading order.
    pub fn neighbors(&self, route: &str) -> Result<Neighbors<'_>, RouteNotFound> {
        let id = self.require(route)?;
        let Some(rank) = self.page_rank[id.0] else {
            return Ok(Neighbors::default());
        };

        Ok(Neighbors {
            previous: rank
                .checked_sub(1)
                .map(|r| self.node(self.page_order[r])),
            next: self.page_order.get(rank + 1).map(|&i| self.node(i)),
        })
    }

    /// All nodes in depth-first pre-order.
    ///
    /// Each call starts a fresh traversal.
    #[must_use]
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten {
            inner: self.nodes.iter(),
        }
    }

    /// All nodes with their ids, in depth-first pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &PageNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Routed nodes in linear reading order.
    pub fn pages(&self) -> impl Iterator<Item = &PageNode> {
        self.page_order.iter().map(|&i| self.node(i))
    }

    /// Routes in linear reading order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.page_order
            .iter()
            .filter_map(|&i| self.nodes[i.0].route.as_deref())
    }

    /// Slash-joined names from the root to `id`.
    #[must_use]
    pub fn node_path(&self, id: NodeId) -> String {
        self.ancestor_ids(id)
            .into_iter()
            .map(|i| self.nodes[i.0].name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Convert back into raw entries with the same structure.
    ///
    /// Meta entries are not preserved.
    #[must_use]
    pub fn to_raw(&self) -> Vec<RawEntry> {
        self.roots
            .iter()
            .map(|&id| RawEntry::Node(self.raw_node(id)))
            .collect()
    }

    fn raw_node(&self, id: NodeId) -> RawNode {
        let node = self.node(id);
        RawNode {
            name: node.name.clone(),
            title: node.title.clone(),
            route: node.route.clone(),
            front_matter: node.front_matter.clone(),
            children: self.children[id.0]
                .iter()
                .map(|&child| RawEntry::Node(self.raw_node(child)))
                .collect(),
        }
    }

    fn require(&self, route: &str) -> Result<NodeId, RouteNotFound> {
        self.lookup(route)
            .ok_or_else(|| RouteNotFound(route.to_owned()))
    }
}

/// Lazy pre-order traversal returned by [`NavTree::flatten`].
#[derive(Clone, Debug)]
pub struct Flatten<'a> {
    inner: std::slice::Iter<'a, PageNode>,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a PageNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Flatten<'_> {}

impl FusedIterator for Flatten<'_> {}

/// Accumulates nodes while validating raw entries.
#[derive(Default)]
struct TreeBuilder {
    nodes: Vec<PageNode>,
    children: Vec<Vec<NodeId>>,
    parents: Vec<Option<NodeId>>,
    roots: Vec<NodeId>,
    route_index: HashMap<String, NodeId>,
}

impl TreeBuilder {
    /// Validate and add one sibling list, then recurse into each node.
    fn add_entries(
        &mut self,
        entries: Vec<RawEntry>,
        parent: Option<NodeId>,
        parent_path: &str,
    ) -> Result<(), ValidationError> {
        let mut names = HashSet::new();

        for (position, entry) in entries.into_iter().enumerate() {
            let RawEntry::Node(raw) = entry else {
                continue;
            };
            let RawNode {
                name,
                title,
                route,
                front_matter,
                children,
            } = raw;

            if name.is_empty() {
                return Err(ValidationError::EmptyName {
                    path: join_path(parent_path, &format!("[{position}]")),
                });
            }
            let path = join_path(parent_path, &name);

            if !names.insert(name.clone()) {
                return Err(ValidationError::DuplicateName { path, name });
            }

            if let Some(route) = &route {
                if let Err(issue) = check_route(route) {
                    return Err(ValidationError::MalformedRoute {
                        path,
                        route: route.clone(),
                        issue,
                    });
                }
                if let Some(&first) = self.route_index.get(route) {
                    return Err(ValidationError::DuplicateRoute {
                        path,
                        route: route.clone(),
                        first: self.path_of(first),
                    });
                }
            } else if !children.iter().any(|c| matches!(c, RawEntry::Node(_))) {
                return Err(ValidationError::EmptyGroup { path });
            }

            let id = NodeId(self.nodes.len());
            if let Some(route) = &route {
                self.route_index.insert(route.clone(), id);
            }
            self.nodes.push(PageNode {
                name,
                title,
                route,
                front_matter,
            });
            self.children.push(Vec::new());
            self.parents.push(parent);

            match parent {
                Some(p) => self.children[p.0].push(id),
                None => self.roots.push(id),
            }

            self.add_entries(children, Some(id), &path)?;
        }

        Ok(())
    }

    fn path_of(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(i) = current {
            names.push(self.nodes[i.0].name.as_str());
            current = self.parents[i.0];
        }
        names.reverse();
        names.join("/")
    }

    fn finish(self, locale: LocaleInfo) -> NavTree {
        let mut page_rank = vec![None; self.nodes.len()];
        let mut page_order = Vec::new();
        for (i, node) in self.nodes.iter().enumerate() {
            if node.route.is_some() {
                page_rank[i] = Some(page_order.len());
                page_order.push(NodeId(i));
            }
        }

        NavTree {
            locale,
            nodes: self.nodes,
            children: self.children,
            parents: self.parents,
            roots: self.roots,
            route_index: self.route_index,
            page_order,
            page_rank,
        }
    }
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn en() -> LocaleInfo {
        LocaleInfo::new("en", "English")
    }

    fn build(nodes: Vec<RawNode>) -> Result<NavTree, ValidationError> {
        NavTree::build(en(), nodes.into_iter().map(RawEntry::Node).collect())
    }

    /// The `intro` + `guides` + `middlewares` site used across tests.
    fn docs_entries() -> Vec<RawNode> {
        vec![
            RawNode::page("intro", "Intro", "/"),
            RawNode::group(
                "guides",
                "Guides",
                [
                    RawNode::page("create-a-store", "Create a store", "/guides/create-a-store"),
                    RawNode::page("derived-state", "Derived state", "/guides/derived-state"),
                ],
            ),
            RawNode::page("middlewares", "Middlewares", "/middlewares").with_children([
                RawNode::page("persist", "persist", "/middlewares/persist"),
                RawNode::page("zustand", "zustand", "/middlewares/zustand"),
            ]),
        ]
    }

    fn docs_tree() -> NavTree {
        build(docs_entries()).unwrap()
    }

    fn names<'a>(nodes: impl IntoIterator<Item = &'a PageNode>) -> Vec<&'a str> {
        nodes.into_iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_find_by_route_returns_leaf() {
        let tree = build(vec![
            RawNode::page("intro", "Intro", "/"),
            RawNode::group(
                "guides",
                "Guides",
                [RawNode::page(
                    "create-a-store",
                    "Create a store",
                    "/guides/create-a-store",
                )],
            ),
        ])
        .unwrap();

        let node = tree.find_by_route("/guides/create-a-store").unwrap();

        assert_eq!(node.name, "create-a-store");
        assert_eq!(node.title, "Create a store");
        let chain = tree.ancestor_chain("/guides/create-a-store").unwrap();
        assert_eq!(names(chain), vec!["guides", "create-a-store"]);
    }

    #[test]
    fn test_find_by_route_not_found() {
        let tree = docs_tree();

        let result = tree.find_by_route("/missing");

        assert_eq!(result, Err(RouteNotFound("/missing".to_owned())));
    }

    #[test]
    fn test_find_by_route_is_exact_match() {
        let tree = docs_tree();

        assert!(tree.find_by_route("/guides").is_err());
        assert!(tree.find_by_route("/middlewares/persist/").is_err());
    }

    #[test]
    fn test_ancestor_chain_root_page() {
        let tree = docs_tree();

        let chain = tree.ancestor_chain("/").unwrap();

        assert_eq!(names(chain), vec!["intro"]);
    }

    #[test]
    fn test_ancestor_chain_not_found() {
        let tree = docs_tree();

        assert!(tree.ancestor_chain("/nope").is_err());
    }

    #[test]
    fn test_every_chain_ends_with_node_and_starts_at_root() {
        let tree = docs_tree();

        for route in tree.routes() {
            let node = tree.find_by_route(route).unwrap();
            let chain = tree.ancestor_chain(route).unwrap();
            assert!(std::ptr::eq(*chain.last().unwrap(), node));

            let ids = tree.ancestor_ids(tree.lookup(route).unwrap());
            assert!(tree.roots().contains(&ids[0]), "{route} does not start at a root");
        }
    }

    #[test]
    fn test_siblings_in_authored_order() {
        let tree = docs_tree();

        let siblings = tree.siblings_of("/middlewares/zustand").unwrap();

        assert_eq!(names(siblings.nodes.clone()), vec!["persist", "zustand"]);
        assert_eq!(siblings.index, 1);
        assert_eq!(siblings.current().name, "zustand");
        assert_eq!(siblings.before().map(|n| n.name.as_str()), Some("persist"));
        assert!(siblings.after().is_none());
    }

    #[test]
    fn test_siblings_of_root_node_are_roots() {
        let tree = docs_tree();

        let siblings = tree.siblings_of("/middlewares").unwrap();

        assert_eq!(
            names(siblings.nodes.clone()),
            vec!["intro", "guides", "middlewares"]
        );
        assert_eq!(siblings.index, 2);
    }

    #[test]
    fn test_neighbors_skip_groups() {
        let tree = docs_tree();

        let neighbors = tree.neighbors("/guides/create-a-store").unwrap();

        assert_eq!(neighbors.previous.map(|n| n.name.as_str()), Some("intro"));
        assert_eq!(
            neighbors.next.map(|n| n.name.as_str()),
            Some("derived-state")
        );
    }

    #[test]
    fn test_neighbors_cross_into_page_with_children() {
        let tree = docs_tree();

        let neighbors = tree.neighbors("/guides/derived-state").unwrap();

        assert_eq!(
            neighbors.next.map(|n| n.name.as_str()),
            Some("middlewares")
        );
    }

    #[test]
    fn test_neighbors_at_ends() {
        let tree = docs_tree();

        assert!(tree.neighbors("/").unwrap().previous.is_none());
        assert!(tree.neighbors("/middlewares/zustand").unwrap().next.is_none());
    }

    #[test]
    fn test_flatten_is_pre_order() {
        let tree = docs_tree();

        let order = names(tree.flatten());

        assert_eq!(
            order,
            vec![
                "intro",
                "guides",
                "create-a-store",
                "derived-state",
                "middlewares",
                "persist",
                "zustand",
            ]
        );
    }

    #[test]
    fn test_flatten_matches_explicit_traversal() {
        fn visit<'a>(tree: &'a NavTree, id: NodeId, out: &mut Vec<&'a str>) {
            out.push(&tree.node(id).name);
            for &child in tree.children(id) {
                visit(tree, child, out);
            }
        }
        let tree = docs_tree();
        let mut expected = Vec::new();
        for &root in tree.roots() {
            visit(&tree, root, &mut expected);
        }

        assert_eq!(names(tree.flatten()), expected);
    }

    #[test]
    fn test_flatten_is_restartable() {
        let tree = docs_tree();

        let first: Vec<_> = tree.flatten().collect();
        let second: Vec<_> = tree.flatten().collect();

        assert_eq!(first.len(), tree.len());
        assert_eq!(first, second);
        assert_eq!(tree.flatten().len(), 7);
    }

    #[test]
    fn test_flattened_routes_are_unique() {
        let tree = docs_tree();

        let routes: Vec<_> = tree.flatten().filter_map(|n| n.route.as_deref()).collect();
        let unique: HashSet<_> = routes.iter().collect();

        assert_eq!(routes.len(), unique.len());
    }

    #[test]
    fn test_routes_skip_groups() {
        let tree = docs_tree();

        let routes: Vec<_> = tree.routes().collect();

        assert_eq!(
            routes,
            vec![
                "/",
                "/guides/create-a-store",
                "/guides/derived-state",
                "/middlewares",
                "/middlewares/persist",
                "/middlewares/zustand",
            ]
        );
    }

    #[test]
    fn test_round_trip_through_raw() {
        let input: Vec<RawEntry> = docs_entries().into_iter().map(RawEntry::Node).collect();
        let tree = NavTree::build(en(), input.clone()).unwrap();

        assert_eq!(tree.to_raw(), input);

        let rebuilt = NavTree::build(en(), tree.to_raw()).unwrap();

        assert_eq!(rebuilt.to_raw(), input);
        assert_eq!(
            tree.flatten().collect::<Vec<_>>(),
            rebuilt.flatten().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_node_path() {
        let tree = docs_tree();
        let id = tree.lookup("/guides/derived-state").unwrap();

        assert_eq!(tree.node_path(id), "guides/derived-state");
    }

    #[test]
    fn test_parent_links() {
        let tree = docs_tree();
        let id = tree.lookup("/middlewares/persist").unwrap();

        let parent = tree.parent(id).unwrap();

        assert_eq!(tree.node(parent).name, "middlewares");
        assert!(tree.parent(parent).is_none());
    }

    #[test]
    fn test_meta_entries_skipped() {
        let json = r#"[
            {"data": {}},
            {"name": "intro", "route": "/", "title": "Intro", "frontMatter": {}}
        ]"#;

        let tree = NavTree::from_json(en(), json).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.find_by_route("/").unwrap().title, "Intro");
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "
- name: intro
  route: /
  title: Intro
- name: guides
  title: Guides
  children:
    - name: create-a-store
      route: /guides/create-a-store
      title: Create a store
      frontMatter:
        draft: true
";

        let tree = NavTree::from_yaml(en(), yaml).unwrap();

        let node = tree.find_by_route("/guides/create-a-store").unwrap();
        assert_eq!(node.front_matter["draft"], serde_json::Value::Bool(true));
        assert!(tree.find_by_route("/").is_ok());
    }

    #[test]
    fn test_front_matter_passed_through() {
        let mut front_matter = FrontMatter::new();
        front_matter.insert("searchable".to_owned(), serde_json::Value::Bool(false));
        let tree = build(vec![
            RawNode::page("intro", "Intro", "/").with_front_matter(front_matter.clone()),
        ])
        .unwrap();

        assert_eq!(tree.find_by_route("/").unwrap().front_matter, front_matter);
    }

    #[test]
    fn test_empty_tree_is_valid() {
        let tree = build(Vec::new()).unwrap();

        assert!(tree.is_empty());
        assert_eq!(tree.flatten().count(), 0);
    }

    // Validation

    #[test]
    fn test_duplicate_route_fails() {
        let result = build(vec![
            RawNode::page("middlewares", "Middlewares", "/middlewares").with_children([
                RawNode::page("persist", "persist", "/middlewares/persist"),
                RawNode::page("persist-v2", "persist", "/middlewares/persist"),
            ]),
        ]);

        let err = result.unwrap_err();
        let ValidationError::DuplicateRoute { path, route, first } = &err else {
            panic!("Expected DuplicateRoute, got {err:?}");
        };
        assert_eq!(route, "/middlewares/persist");
        assert_eq!(path, "middlewares/persist-v2");
        assert_eq!(first, "middlewares/persist");
        assert!(err.to_string().contains("/middlewares/persist"));
    }

    #[test]
    fn test_duplicate_route_across_branches_fails() {
        let result = build(vec![
            RawNode::page("persist", "persist", "/middlewares/persist"),
            RawNode::group(
                "middlewares",
                "Middlewares",
                [RawNode::page("persist", "persist", "/middlewares/persist")],
            ),
        ]);

        assert!(matches!(
            result,
            Err(ValidationError::DuplicateRoute { .. })
        ));
    }

    #[test]
    fn test_group_route_equal_to_child_route_fails() {
        let result = build(vec![
            RawNode::page("guides", "Guides", "/guides/create-a-store").with_children([
                RawNode::page("create-a-store", "Create a store", "/guides/create-a-store"),
            ]),
        ]);

        assert!(matches!(
            result,
            Err(ValidationError::DuplicateRoute { .. })
        ));
    }

    #[test]
    fn test_empty_group_fails() {
        let result = build(vec![RawNode::group("utils", "Utils", [])]);

        let err = result.unwrap_err();
        assert!(
            matches!(&err, ValidationError::EmptyGroup { path } if path == "utils"),
            "Expected EmptyGroup, got {err:?}"
        );
    }

    #[test]
    fn test_group_with_only_meta_children_fails() {
        let json = r#"[{"name": "utils", "route": null, "children": [{"data": {}}]}]"#;

        let result = NavTree::from_json(en(), json);

        assert!(matches!(result, Err(ValidationError::EmptyGroup { .. })));
    }

    #[test]
    fn test_duplicate_sibling_name_fails() {
        let result = build(vec![
            RawNode::page("intro", "Intro", "/"),
            RawNode::page("intro", "Intro again", "/intro"),
        ]);

        assert!(matches!(
            result,
            Err(ValidationError::DuplicateName { ref name, .. }) if name == "intro"
        ));
    }

    #[test]
    fn test_same_name_under_different_parents_is_valid() {
        let result = build(vec![
            RawNode::group("a", "A", [RawNode::page("setup", "Setup", "/a/setup")]),
            RawNode::group("b", "B", [RawNode::page("setup", "Setup", "/b/setup")]),
        ]);

        assert!(result.is_ok());
    }

    #[test]
    fn test_malformed_route_fails() {
        let result = build(vec![RawNode::group(
            "guides",
            "Guides",
            [RawNode::page("intro", "Intro", "/guides/intro/")],
        )]);

        let err = result.unwrap_err();
        assert_eq!(err.path(), Some("guides/intro"));
        assert!(matches!(err, ValidationError::MalformedRoute { .. }));
    }

    #[test]
    fn test_empty_name_reports_position() {
        let result = build(vec![RawNode::group(
            "guides",
            "Guides",
            [
                RawNode::page("intro", "Intro", "/guides/intro"),
                RawNode::page("", "Unnamed", "/guides/unnamed"),
            ],
        )]);

        let err = result.unwrap_err();
        assert!(matches!(err, ValidationError::EmptyName { .. }));
        assert_eq!(err.path(), Some("guides/[1]"));
    }

    #[test]
    fn test_empty_locale_fails() {
        let result = NavTree::build(LocaleInfo::new("", "Nowhere"), Vec::new());

        assert!(matches!(result, Err(ValidationError::EmptyLocale)));
    }

    #[test]
    fn test_wrong_field_type_names_node() {
        let json = r#"[{"name": "guides", "children": [
            {"name": "a", "route": "/a", "title": "A"},
            {"name": "b", "route": 5, "title": "B"}
        ]}]"#;

        let err = NavTree::from_json(en(), json).unwrap_err();

        assert!(matches!(err, ValidationError::Json(_)));
        let message = err.to_string();
        assert!(message.contains("in node 'guides': in node 'b'"), "{message}");
        assert!(message.contains("invalid type: integer `5`"), "{message}");
    }

    #[test]
    fn test_invalid_json_fails() {
        let result = NavTree::from_json(en(), "[{");

        assert!(matches!(result, Err(ValidationError::Json(_))));
    }
}
