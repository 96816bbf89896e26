//! Selection state.
//!
//! In multiselect mode the marked set is a set of row indices. Toggling a
//! row flips that row and its whole subtree range to the same new state;
//! ancestors are never touched. Single-select keeps no set at all: the
//! answer is read from the cursor when the session ends.

use std::collections::BTreeSet;

use crate::config::PickerConfig;

use super::flatten::FlatTree;

/// Whether SPACE marks rows or the cursor alone decides the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    Single,
    Multi,
}

/// How the final answer set is shaped before formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputPolicy {
    /// Single-select: answer is the cursor row plus its subtree
    pub include_children: bool,
    /// Drop non-leaf rows from the answer
    pub leaves_only: bool,
}

impl OutputPolicy {
    pub fn from_config(config: &PickerConfig) -> Self {
        Self {
            include_children: config.singleselect_output_include_children,
            leaves_only: config.output_leaves_only,
        }
    }
}

/// Marked rows of a session
#[derive(Debug, Clone)]
pub struct Selection {
    mode: SelectMode,
    marked: BTreeSet<usize>,
}

impl Selection {
    pub fn new(mode: SelectMode) -> Self {
        Self {
            mode,
            marked: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    /// Flip row `index` and its subtree. Returns whether the row is marked
    /// afterwards; always `false` in single-select mode.
    pub fn toggle(&mut self, index: usize, tree: &FlatTree) -> bool {
        if self.mode == SelectMode::Single {
            return false;
        }
        let Some(row) = tree.row(index) else {
            return false;
        };

        if self.marked.contains(&index) {
            for i in row.subtree() {
                self.marked.remove(&i);
            }
            false
        } else {
            self.marked.extend(row.subtree());
            true
        }
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Marked indices in ascending order
    pub fn marked(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked.iter().copied()
    }

    /// Mark every row
    pub fn select_all(&mut self, tree: &FlatTree) {
        if self.mode == SelectMode::Multi {
            self.marked.extend(0..tree.len());
        }
    }

    pub fn clear(&mut self) {
        self.marked.clear();
    }

    /// Compute the answer set in ascending row order
    pub fn resolve(&self, tree: &FlatTree, cursor: usize, policy: OutputPolicy) -> Vec<usize> {
        let picked: Vec<usize> = match self.mode {
            SelectMode::Multi => self.marked().collect(),
            SelectMode::Single => match tree.row(cursor) {
                Some(row) if policy.include_children => row.subtree().collect(),
                Some(_) => vec![cursor],
                None => Vec::new(),
            },
        };

        if policy.leaves_only {
            picked
                .into_iter()
                .filter(|&i| tree.row(i).is_some_and(|r| r.is_leaf))
                .collect()
        } else {
            picked
        }
    }
}
