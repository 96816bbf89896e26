//! Picker session state and action handling.
//!
//! A [`Session`] owns the flattened tree, the selection, the cursor and the
//! viewport for one picker run. Only the dispatcher and custom key
//! handlers mutate it.

use tracing::{debug, trace};

use crate::config::PickerConfig;
use crate::error::PickResult;

use super::flatten::FlatTree;
use super::node::Node;
use super::output::{self, Picked};
use super::render::{render_row, Frame, RenderedRow};
use super::selection::{OutputPolicy, SelectMode, Selection};
use super::viewport::Viewport;

/// Built-in picker action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Toggle the cursor row (multiselect only)
    Toggle,
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

/// What the loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue,
    Confirmed,
    Cancelled,
}

/// Live state of one picker run
#[derive(Debug, Clone)]
pub struct Session {
    tree: FlatTree,
    config: PickerConfig,
    selection: Selection,
    policy: OutputPolicy,
    cursor: usize,
    viewport: Viewport,
}

impl Session {
    /// Flatten `root` and validate `config` against it
    pub fn new(root: Node, config: PickerConfig) -> PickResult<Self> {
        let tree = FlatTree::new(root);
        config.validate(tree.len())?;

        let mode = if config.multiselect {
            SelectMode::Multi
        } else {
            SelectMode::Single
        };
        let cursor = config.default_index;
        // Everything visible until the real screen height is known
        let mut viewport = Viewport::new(tree.len())?;
        viewport.follow(cursor, tree.len());

        Ok(Self {
            policy: OutputPolicy::from_config(&config),
            selection: Selection::new(mode),
            tree,
            config,
            cursor,
            viewport,
        })
    }

    pub fn tree(&self) -> &FlatTree {
        &self.tree
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Get current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn row_count(&self) -> usize {
        self.tree.len()
    }

    /// Move the cursor to `index`, clamped to the last row
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.tree.len().saturating_sub(1));
        self.viewport.follow(self.cursor, self.tree.len());
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.set_cursor(self.cursor - 1);
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.tree.len() {
            self.set_cursor(self.cursor + 1);
        }
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.selection.is_marked(index)
    }

    /// Toggle `index` and its subtree; no-op in single-select mode
    pub fn toggle(&mut self, index: usize) -> bool {
        let marked = self.selection.toggle(index, &self.tree);
        debug!(index, marked, count = self.selection.marked_count(), "toggled row");
        marked
    }

    /// Mark every row (multiselect only)
    pub fn select_all(&mut self) {
        self.selection.select_all(&self.tree);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Whether confirm would end the session right now
    pub fn can_confirm(&self) -> bool {
        self.selection.mode() == SelectMode::Single
            || self.selection.marked_count() >= self.config.min_selection_count
    }

    /// Handle a built-in action
    pub fn handle_action(&mut self, action: PickAction) -> ActionOutcome {
        match action {
            PickAction::Up => {
                self.move_up();
                ActionOutcome::Continue
            }
            PickAction::Down => {
                self.move_down();
                ActionOutcome::Continue
            }
            PickAction::Toggle => {
                self.toggle(self.cursor);
                ActionOutcome::Continue
            }
            PickAction::Confirm => {
                if self.can_confirm() {
                    ActionOutcome::Confirmed
                } else {
                    debug!(
                        marked = self.selection.marked_count(),
                        required = self.config.min_selection_count,
                        "confirm ignored below minimum selection"
                    );
                    ActionOutcome::Continue
                }
            }
            PickAction::Quit => ActionOutcome::Cancelled,
        }
    }

    /// Row indices of the current answer, ascending
    pub fn resolve(&self) -> Vec<usize> {
        self.selection.resolve(&self.tree, self.cursor, self.policy)
    }

    /// Current answer in the configured output format
    pub fn selected(&self) -> Picked {
        let single = self.selection.mode() == SelectMode::Single
            && !self.policy.include_children
            && !self.policy.leaves_only;
        output::format(
            &self.tree,
            &self.resolve(),
            self.config.output_format,
            single,
        )
    }

    /// Option rows available below the title on a screen `screen_rows` tall
    fn available_rows(&self, screen_rows: u16) -> usize {
        // one line of top margin
        usize::from(screen_rows)
            .saturating_sub(1)
            .saturating_sub(self.config.title_lines().len())
    }

    /// Size the viewport for the initial screen. Fails when no option row
    /// would fit.
    pub fn fit_viewport(&mut self, screen_rows: u16) -> PickResult<()> {
        let mut viewport = Viewport::new(self.available_rows(screen_rows))?;
        viewport.follow(self.cursor, self.tree.len());
        self.viewport = viewport;
        Ok(())
    }

    /// Follow a terminal resize; never shrinks below one row
    pub fn resize(&mut self, screen_rows: u16) {
        let height = self.available_rows(screen_rows);
        if height != self.viewport.height {
            self.viewport.resize(height, self.cursor, self.tree.len());
            trace!(height = self.viewport.height, top = self.viewport.top, "viewport resized");
        }
    }

    /// Render every option row (ignores the viewport)
    pub fn option_lines(&self, supports_unicode: bool) -> Vec<String> {
        (0..self.tree.len())
            .map(|i| self.render_index(i, supports_unicode).text)
            .collect()
    }

    fn render_index(&self, index: usize, supports_unicode: bool) -> RenderedRow {
        let name = self.tree.name(index).unwrap_or_default();
        let text = render_row(
            name,
            &self.tree.tails(index),
            index == self.cursor,
            &self.config,
            supports_unicode,
        );
        RenderedRow {
            index,
            text,
            marked: self.selection.is_marked(index),
            active: index == self.cursor,
        }
    }

    /// Title plus the rows inside the viewport
    pub fn frame(&self, supports_unicode: bool) -> Frame {
        Frame {
            title: self.config.title_lines(),
            rows: self
                .viewport
                .range(self.tree.len())
                .map(|i| self.render_index(i, supports_unicode))
                .collect(),
            foreground: self.config.foreground,
            background: self.config.background,
        }
    }
}
