//! Output formatting.
//!
//! Projects the resolved row indices into the caller-facing result shape
//! selected by [`OutputFormat`].

use serde::Serialize;

use crate::config::OutputFormat;

use super::flatten::FlatTree;
use super::node::Node;

/// One selected entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pick {
    Node(Node),
    NodeIndex(Node, usize),
    Name(String),
    NameIndex(String, usize),
}

impl Pick {
    /// Row index, when the format carries one
    pub fn index(&self) -> Option<usize> {
        match self {
            Pick::NodeIndex(_, i) | Pick::NameIndex(_, i) => Some(*i),
            Pick::Node(_) | Pick::Name(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Pick::Node(node) | Pick::NodeIndex(node, _) => &node.name,
            Pick::Name(name) | Pick::NameIndex(name, _) => name,
        }
    }
}

/// The confirmed answer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Picked {
    /// Single-select without child expansion: exactly one entry
    One(Pick),
    /// Every other policy, in ascending row order
    Many(Vec<Pick>),
}

impl Picked {
    /// All entries, regardless of shape
    pub fn into_vec(self) -> Vec<Pick> {
        match self {
            Picked::One(pick) => vec![pick],
            Picked::Many(picks) => picks,
        }
    }
}

/// Build the entry for row `index`
pub fn format_row(tree: &FlatTree, index: usize, style: OutputFormat) -> Option<Pick> {
    let node = tree.node(index)?;
    Some(match style {
        OutputFormat::NodeOnly => Pick::Node(node.clone()),
        OutputFormat::NodeIndex => Pick::NodeIndex(node.clone(), index),
        OutputFormat::NameOnly => Pick::Name(node.name.clone()),
        OutputFormat::NameIndex => Pick::NameIndex(node.name.clone(), index),
    })
}

/// Format resolved rows. `single` collapses the result to one entry.
pub fn format(tree: &FlatTree, indices: &[usize], style: OutputFormat, single: bool) -> Picked {
    let mut picks: Vec<Pick> = indices
        .iter()
        .filter_map(|&i| format_row(tree, i, style))
        .collect();

    if single && picks.len() == 1 {
        Picked::One(picks.remove(0))
    } else {
        Picked::Many(picks)
    }
}
