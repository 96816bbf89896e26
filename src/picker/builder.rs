//! Option tree construction.
//!
//! Callers hand the picker either a ready-made [`Node`] tree or a flat list
//! of their own items plus a mapping function. The list form is turned into
//! a tree here, once, before anything is flattened.

use tracing::debug;

use crate::error::{PickError, PickResult};

use super::node::Node;

/// Name of the synthetic root created for multi-item lists
pub const SELECT_ALL: &str = "Select all";

/// Maps one caller item to a tree node
pub type MapFn<T> = Box<dyn Fn(&T) -> Node>;

/// Input for a picker session
pub enum Options<T = String> {
    /// A complete option tree; its root is the "select all" row
    Tree(Node),
    /// Caller items, mapped to nodes by `map`
    List { items: Vec<T>, map: Option<MapFn<T>> },
}

impl Options {
    /// A ready-made option tree
    pub fn tree(root: Node) -> Self {
        Options::Tree(root)
    }
}

impl<T> Options<T> {
    /// A list of items mapped through `map`
    pub fn list(items: Vec<T>, map: impl Fn(&T) -> Node + 'static) -> Self {
        Options::List {
            items,
            map: Some(Box::new(map)),
        }
    }

    /// A list without a mapping function. Building it always fails.
    pub fn unmapped(items: Vec<T>) -> Self {
        Options::List { items, map: None }
    }
}

impl<T: ToString + 'static> Options<T> {
    /// A list whose items become leaves named by their `to_string()`
    pub fn strings(items: Vec<T>) -> Self {
        Self::list(items, |item| Node::new(item.to_string()))
    }
}

impl From<Node> for Options {
    fn from(root: Node) -> Self {
        Options::Tree(root)
    }
}

/// Resolve `options` into the root node, applying the `root_name` override
pub fn build_root<T>(options: Options<T>, root_name: Option<&str>) -> PickResult<Node> {
    let mut root = match options {
        Options::Tree(root) => root,
        Options::List { items, map } => {
            if items.is_empty() {
                return Err(PickError::tree("options should not be an empty list"));
            }
            let Some(map) = map else {
                return Err(PickError::tree(
                    "a mapping function is required when options is a list",
                ));
            };

            let mut nodes: Vec<Node> = items.iter().map(|item| map(item)).collect();
            debug!(count = nodes.len(), "mapped list options to nodes");
            if nodes.len() == 1 {
                nodes.remove(0)
            } else {
                Node::with_children(SELECT_ALL, nodes)
            }
        }
    };

    if let Some(name) = root_name {
        root.name = name.to_string();
    }

    Ok(root)
}
