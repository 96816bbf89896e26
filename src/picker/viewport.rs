//! Scrolling viewport.
//!
//! Keeps the cursor row inside the visible window, scrolling by the
//! smallest amount that does so.

use crate::error::{PickError, PickResult};

/// Visible window into the row sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Index of the first displayed row
    pub top: usize,
    /// Number of rows that fit on screen
    pub height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> PickResult<Self> {
        if height == 0 {
            return Err(PickError::config(
                "terminal too small: no rows left to display options",
            ));
        }
        Ok(Self { top: 0, height })
    }

    /// Scroll so `cursor` is visible
    pub fn follow(&mut self, cursor: usize, row_count: usize) {
        self.top = recompute(cursor, self.top, self.height, row_count);
    }

    /// Change the height (terminal resized) and re-anchor on `cursor`
    pub fn resize(&mut self, height: usize, cursor: usize, row_count: usize) {
        self.height = height.max(1);
        self.follow(cursor, row_count);
    }

    /// Rows currently on screen
    pub fn range(&self, row_count: usize) -> std::ops::Range<usize> {
        let end = (self.top + self.height).min(row_count);
        self.top.min(end)..end
    }
}

/// New top row for `cursor`, given the current `top`.
///
/// The result is clamped to `0..=row_count.saturating_sub(height)`.
pub fn recompute(cursor: usize, top: usize, height: usize, row_count: usize) -> usize {
    let height = height.max(1);
    let mut top = top;

    if cursor < top {
        top = cursor;
    } else if cursor >= top + height {
        top = cursor + 1 - height;
    }

    let max_top = row_count.saturating_sub(height);
    top.min(max_top)
}
