//! Design tokens for the picker UI.
//!
//! Colors and tree glyphs used by the renderer and the terminal backend.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    /// Title text
    pub const TITLE: Color = Color::Cyan;
}

/// Tree indentation guides
pub mod guides {
    pub const BRANCH: &str = "├── ";
    pub const LAST: &str = "└── ";
    pub const PIPE: &str = "│   ";
    pub const BLANK: &str = "    ";
}

pub mod guides_ascii {
    pub const BRANCH: &str = "|-- ";
    pub const LAST: &str = "`-- ";
    pub const PIPE: &str = "|   ";
    pub const BLANK: &str = "    ";
}
