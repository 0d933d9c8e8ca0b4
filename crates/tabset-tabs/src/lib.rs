//! Tabset Tab Records
//!
//! Turns declared child nodes into an ordered list of tab records and keeps
//! the active key valid as that list changes.

mod error;
mod node;
mod state;
mod tab;

pub use error::TabError;
pub use node::{camelize, flatten_children, Element, Key, VNode, DEFAULT_SLOT, TAB_PANE_TAG};
pub use state::SelectionState;
pub use tab::{attr_flag, parse_tab_list, Label, Tab};

pub type Result<T> = std::result::Result<T, TabError>;
