//! Tabs configuration
//!
//! Declarative props of one tabs widget. Every field has a default, so a
//! partial JSON object is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use tabset_presentation::{PresentationProps, DEFAULT_MOBILE_BREAKPOINT};
use tabset_tabs::{Key, VNode};

use crate::error::CoreError;
use crate::Result;

pub const DEFAULT_PREFIX_CLS: &str = "tabset";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabsConfig {
    /// Controlled active key
    pub active_key: Option<Key>,
    /// Initial active key when uncontrolled
    pub default_active_key: Option<Key>,
    /// Accessibility id; generated when unset
    pub id: Option<String>,
    /// Prefix for generated ids and class names
    pub prefix_cls: String,
    /// Animation, position, direction, size and variant
    #[serde(flatten)]
    pub presentation: PresentationProps,
    /// Center the tab headers
    pub centered: bool,
    /// Hide the add button of the editable variant
    pub hide_add: bool,
    /// Gap between tab headers, in pixels
    pub tab_bar_gutter: Option<u32>,
    /// Drop pane content whenever a pane becomes inactive
    pub destroy_inactive_tab_pane: bool,
    /// Accessible labels
    pub locale: TabsLocale,
    /// Viewport width below which the widget switches to its mobile layout
    pub mobile_breakpoint: u32,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            active_key: None,
            default_active_key: None,
            id: None,
            prefix_cls: DEFAULT_PREFIX_CLS.to_string(),
            presentation: PresentationProps::default(),
            centered: false,
            hide_add: false,
            tab_bar_gutter: None,
            destroy_inactive_tab_pane: false,
            locale: TabsLocale::default(),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

impl TabsConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn is_controlled(&self) -> bool {
        self.active_key.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabsLocale {
    pub dropdown_aria_label: String,
    pub remove_aria_label: String,
    pub add_aria_label: String,
}

impl Default for TabsLocale {
    fn default() -> Self {
        Self {
            dropdown_aria_label: "expanded dropdown".to_string(),
            remove_aria_label: "remove".to_string(),
            add_aria_label: "Add tab".to_string(),
        }
    }
}

/// Content injected next to the tab headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraContent {
    /// Placed after the headers
    Single(Vec<VNode>),
    /// Placed before and after the headers
    Sides {
        #[serde(default)]
        left: Option<Vec<VNode>>,
        #[serde(default)]
        right: Option<Vec<VNode>>,
    },
}

/// Slot content supplied by the owner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabsSlots {
    pub add_icon: Option<Vec<VNode>>,
    pub remove_icon: Option<Vec<VNode>>,
    pub more_icon: Option<Vec<VNode>>,
    pub tab_bar_extra_content: Option<ExtraContent>,
}
