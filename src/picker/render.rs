//! Rendering of picker rows into text lines.
//!
//! Rendering is pure: it turns session state into a [`Frame`] that a
//! terminal backend paints.

use crossterm::style::Color;
use unicode_width::UnicodeWidthStr;

use crate::config::PickerConfig;
use crate::theme::{guides, guides_ascii};


/// One visible option line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Row index in the flattened tree
    pub index: usize,
    pub text: String,
    /// Row is in the marked set (drawn highlighted)
    pub marked: bool,
    /// Row is under the cursor
    pub active: bool,
}

/// Everything a backend needs to paint one screen
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub title: Vec<String>,
    pub rows: Vec<RenderedRow>,
    pub foreground: Color,
    pub background: Color,
}

impl Frame {
    /// Title and option lines, top to bottom
    pub fn lines(&self) -> Vec<&str> {
        self.title
            .iter()
            .map(String::as_str)
            .chain(self.rows.iter().map(|r| r.text.as_str()))
            .collect()
    }

    /// Screen line (0-based, title included) of the cursor row, if visible
    pub fn cursor_line(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| r.active)
            .map(|pos| pos + self.title.len())
    }
}

/// Indentation guide for a row, e.g. `│   ├── `
pub fn render_guide(tails: &[bool], supports_unicode: bool) -> String {
    let Some((own, ancestors)) = tails.split_last() else {
        return String::new();
    };

    let (branch, last, pipe, blank) = if supports_unicode {
        (guides::BRANCH, guides::LAST, guides::PIPE, guides::BLANK)
    } else {
        (
            guides_ascii::BRANCH,
            guides_ascii::LAST,
            guides_ascii::PIPE,
            guides_ascii::BLANK,
        )
    };

    let mut out = String::new();
    for &is_last in ancestors {
        out.push_str(if is_last { blank } else { pipe });
    }
    out.push_str(if *own { last } else { branch });
    out
}

/// Cursor indicator column: the indicator on the active row, blank padding
/// of the same display width elsewhere
pub fn render_indicator(config: &PickerConfig, is_active: bool) -> String {
    let mark = if is_active {
        config.indicator.clone()
    } else {
        " ".repeat(config.indicator.width())
    };

    if config.indicator_parentheses {
        let (open, close) = &config.indicator_parentheses_design;
        format!("{}{}{}", open, mark, close)
    } else {
        mark
    }
}

/// Render a single option row to a string. `tails` comes from
/// [`FlatTree::tails`](super::flatten::FlatTree::tails).
pub fn render_row(
    name: &str,
    tails: &[bool],
    is_active: bool,
    config: &PickerConfig,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {} {}",
        render_indicator(config, is_active),
        render_guide(tails, supports_unicode),
        name
    )
}

/// Cut `line` to at most `max_width` display columns
pub fn truncate_to_width(line: &str, max_width: usize) -> &str {
    if line.width() <= max_width {
        return line;
    }

    let mut width = 0;
    for (i, ch) in line.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max_width {
            return &line[..i];
        }
        width += w;
    }
    line
}
