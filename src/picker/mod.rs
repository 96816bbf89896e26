//! Tree Picker
//!
//! An interactive list of hierarchical options. Selecting a parent selects
//! its whole subtree.
//!
//! # Module Structure
//!
//! - `node` - Node tree and attribute payload
//! - `builder` - Tree construction from caller lists
//! - `flatten` - Pre-order flattening into indexed rows
//! - `selection` - Marked set, propagation and answer resolution
//! - `viewport` - Scrolling window that follows the cursor
//! - `menu` - Session state and built-in action handling
//! - `input` - Key dispatch, custom handlers and the session loop
//! - `output` - Result formatting
//! - `render` - Row and frame rendering

mod builder;
mod flatten;
mod input;
mod menu;
mod node;
mod output;
pub(crate) mod render;
mod selection;
mod viewport;

pub use builder::{build_root, MapFn, Options, SELECT_ALL};
pub use flatten::{FlatTree, Row};
pub use input::{key_to_action, pick, KeyHandler, PickOutcome, Picker};
pub use menu::{ActionOutcome, PickAction, Session};
pub use node::{Attributes, Node};
pub use output::{format, format_row, Pick, Picked};
pub use render::{render_guide, render_indicator, render_row, Frame, RenderedRow};
pub use selection::{OutputPolicy, SelectMode, Selection};
pub use viewport::{recompute, Viewport};
