//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{PickError, PickResult};

/// Glyph drawn next to the row under the cursor
pub const DEFAULT_INDICATOR: &str = "*";

/// Shape of each entry in the picker's result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The selected node and its row index: `(Node, 0)`
    #[default]
    NodeIndex,
    /// The selected node's name and its row index: `("name", 0)`
    NameIndex,
    /// Only the selected node
    NodeOnly,
    /// Only the selected node's name
    NameOnly,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::NodeIndex => "nodeindex",
            OutputFormat::NameIndex => "nameindex",
            OutputFormat::NodeOnly => "nodeonly",
            OutputFormat::NameOnly => "nameonly",
        }
    }

    pub fn with_index(&self) -> bool {
        matches!(self, OutputFormat::NodeIndex | OutputFormat::NameIndex)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = PickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nodeindex" => Ok(OutputFormat::NodeIndex),
            "nameindex" => Ok(OutputFormat::NameIndex),
            "nodeonly" => Ok(OutputFormat::NodeOnly),
            "nameonly" => Ok(OutputFormat::NameOnly),
            other => Err(PickError::config(format!(
                "unknown output_format '{}' (expected nodeindex, nameindex, nodeonly or nameonly)",
                other
            ))),
        }
    }
}

/// Picker options
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Heading drawn above the options; may span several lines
    pub title: Option<String>,
    /// Overrides the root ("select all") node's name
    pub root_name: Option<String>,
    /// Allow marking several rows with SPACE
    pub multiselect: bool,
    /// Single-select only: return the cursor row together with its subtree
    pub singleselect_output_include_children: bool,
    /// Drop non-leaf rows from the result
    pub output_leaves_only: bool,
    pub output_format: OutputFormat,
    pub indicator: String,
    pub indicator_parentheses: bool,
    pub indicator_parentheses_design: (String, String),
    /// Row the cursor starts on
    pub default_index: usize,
    /// Multiselect only: confirm is ignored until this many rows are marked
    pub min_selection_count: usize,
    /// Text color of marked rows
    pub foreground: Color,
    /// Background color of marked rows
    pub background: Color,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            title: None,
            root_name: None,
            multiselect: false,
            singleselect_output_include_children: false,
            output_leaves_only: false,
            output_format: OutputFormat::default(),
            indicator: DEFAULT_INDICATOR.to_string(),
            indicator_parentheses: true,
            indicator_parentheses_design: ("(".to_string(), ")".to_string()),
            default_index: 0,
            min_selection_count: 0,
            foreground: Color::White,
            background: Color::Green,
        }
    }
}

impl PickerConfig {
    /// Check the options against each other and against the flattened
    /// tree size. Runs once, before the session loop starts.
    pub fn validate(&self, row_count: usize) -> PickResult<()> {
        if !self.multiselect && !self.singleselect_output_include_children && self.output_leaves_only
        {
            return Err(PickError::config(
                "output_leaves_only in single-select mode requires singleselect_output_include_children",
            ));
        }

        if self.default_index >= row_count {
            return Err(PickError::config(format!(
                "default_index {} is out of range for {} rows",
                self.default_index, row_count
            )));
        }

        if self.multiselect && self.min_selection_count > row_count {
            return Err(PickError::config(format!(
                "min_selection_count {} exceeds the {} available rows; no selection could be confirmed",
                self.min_selection_count, row_count
            )));
        }

        Ok(())
    }

    /// Title split into screen lines, followed by a blank separator line
    pub fn title_lines(&self) -> Vec<String> {
        match &self.title {
            Some(title) if !title.is_empty() => {
                let mut lines: Vec<String> = title.split('\n').map(str::to_string).collect();
                lines.push(String::new());
                lines
            }
            _ => Vec::new(),
        }
    }
}
