//! Animation flags
//!
//! The `animated` prop is either a boolean or a partial object:
//! ```text
//! false             -> { inkBar: false, tabPane: false }
//! true              -> { inkBar: true,  tabPane: true  }
//! { tabPane: true } -> merged over { inkBar: true, tabPane: false }
//! ```

use serde::{Deserialize, Serialize};

/// Declared `animated` prop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Animated {
    Bool(bool),
    Config {
        #[serde(default, rename = "inkBar")]
        ink_bar: Option<bool>,
        #[serde(default, rename = "tabPane")]
        tab_pane: Option<bool>,
    },
}

/// Resolved animation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimatedConfig {
    /// Slide the active-tab indicator
    pub ink_bar: bool,
    /// Animate switching between panes
    pub tab_pane: bool,
}

impl Default for AnimatedConfig {
    fn default() -> Self {
        Self {
            ink_bar: true,
            tab_pane: false,
        }
    }
}

impl AnimatedConfig {
    pub fn resolve(animated: Option<&Animated>) -> Self {
        let defaults = Self::default();
        match animated {
            Some(Animated::Bool(false)) => Self {
                ink_bar: false,
                tab_pane: false,
            },
            Some(Animated::Bool(true)) => Self {
                ink_bar: true,
                tab_pane: true,
            },
            Some(Animated::Config { ink_bar, tab_pane }) => Self {
                ink_bar: ink_bar.unwrap_or(defaults.ink_bar),
                tab_pane: tab_pane.unwrap_or(defaults.tab_pane),
            },
            None => defaults,
        }
    }
}

impl From<bool> for Animated {
    fn from(value: bool) -> Self {
        Animated::Bool(value)
    }
}
