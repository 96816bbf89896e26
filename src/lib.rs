//! treepick - interactive terminal picker for hierarchical options
//!
//! treepick shows a tree of options in the terminal, lets the user move a
//! cursor over it and returns what was picked. In multiselect mode,
//! marking a parent marks its entire subtree, which suits "pick the
//! components to install" flows.
//!
//! ```no_run
//! use treepick::{Node, Options, Picker, PickerConfig};
//!
//! let root = Node::with_children(
//!     "Select all",
//!     vec![
//!         Node::with_children("Functional", vec![Node::new("Erlang"), Node::new("Haskell")]),
//!         Node::with_children("Imperative", vec![Node::new("C"), Node::new("Go")]),
//!     ],
//! );
//! let config = PickerConfig {
//!     multiselect: true,
//!     ..Default::default()
//! };
//! let mut picker: Picker = Picker::new(Options::tree(root), config)?;
//! let outcome = picker.start()?;
//! # Ok::<(), treepick::PickError>(())
//! ```

pub mod config;
pub mod error;
pub mod picker;
pub mod terminal;
pub mod theme;

// Re-exports for convenience
pub use config::{OutputFormat, PickerConfig};
pub use error::{PickError, PickResult};
pub use picker::{
    pick, Node, Options, Pick, PickOutcome, Picked, Picker, Session, SELECT_ALL,
};
pub use terminal::{Backend, CrosstermBackend};
