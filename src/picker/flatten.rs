//! Tree flattening.
//!
//! The option tree is walked once, depth-first pre-order, into a dense
//! sequence of [`Row`]s. Row indices are the only identifiers the
//! selection, cursor and output code use. Because of the pre-order walk a
//! node's subtree is always the contiguous range `index..subtree_end`.

use std::ops::Range;

use super::node::Node;

/// A flattened, displayable tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Position in pre-order traversal (0 = root)
    pub index: usize,
    /// Depth level (0 = root)
    pub depth: usize,
    /// Index of the parent row
    pub parent: Option<usize>,
    /// Exclusive end of this row's subtree range
    pub subtree_end: usize,
    /// Whether the node has no children
    pub is_leaf: bool,
    /// Whether the node is the last of its siblings (false for the root)
    pub is_last: bool,
    /// Position among the parent's children
    child_pos: usize,
}

impl Row {
    /// Contiguous index range of this row and all its descendants
    pub fn subtree(&self) -> Range<usize> {
        self.index..self.subtree_end
    }

    pub fn subtree_len(&self) -> usize {
        self.subtree_end - self.index
    }
}

/// The option tree together with its flattened rows
#[derive(Debug, Clone)]
pub struct FlatTree {
    root: Node,
    rows: Vec<Row>,
}

impl FlatTree {
    /// Flatten `root` into rows
    pub fn new(root: Node) -> Self {
        let mut rows = Vec::with_capacity(root.subtree_len());
        Self::flatten_node(&root, None, 0, 0, false, &mut rows);
        Self { root, rows }
    }

    fn flatten_node(
        node: &Node,
        parent: Option<usize>,
        depth: usize,
        child_pos: usize,
        is_last: bool,
        rows: &mut Vec<Row>,
    ) {
        let index = rows.len();
        rows.push(Row {
            index,
            depth,
            parent,
            subtree_end: index + 1,
            is_leaf: node.is_leaf(),
            is_last,
            child_pos,
        });

        let last = node.children.len().saturating_sub(1);
        for (i, child) in node.children.iter().enumerate() {
            Self::flatten_node(child, Some(index), depth + 1, i, i == last, rows);
        }

        rows[index].subtree_end = rows.len();
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: a tree has at least its root row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows from just below the root down to `index`
    fn lineage(&self, index: usize) -> Vec<&Row> {
        let Some(row) = self.rows.get(index) else {
            return Vec::new();
        };
        let mut chain: Vec<&Row> = std::iter::once(index)
            .chain(self.ancestors(index))
            .map(|i| &self.rows[i])
            .take(row.depth)
            .collect();
        chain.reverse();
        chain
    }

    /// The node behind row `index`
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.rows.get(index)?;
        let mut node = &self.root;
        for row in self.lineage(index) {
            node = node.children.get(row.child_pos)?;
        }
        Some(node)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.node(index).map(|n| n.name.as_str())
    }

    /// Last-sibling flags from the first level below the root down to row
    /// `index`. Drives the indentation guides.
    pub fn tails(&self, index: usize) -> Vec<bool> {
        self.lineage(index).iter().map(|r| r.is_last).collect()
    }

    /// Parent, grandparent, ... of row `index`, nearest first
    pub fn ancestors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let mut next = self.rows.get(index).and_then(|r| r.parent);
        std::iter::from_fn(move || {
            let current = next?;
            next = self.rows[current].parent;
            Some(current)
        })
    }
}
