//! Renderer-facing state
//!
//! `TabsView` is the snapshot both the navigation list and the panel list
//! draw from. It serializes so a host can ship it to a webview as is.

use serde::Serialize;

use tabset_presentation::Presentation;
use tabset_tabs::{Key, Tab, VNode};

use crate::config::{ExtraContent, TabsLocale};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabView {
    pub tab: Tab,
    /// Id of the header element
    pub tab_id: String,
    /// Id of the pane element
    pub panel_id: String,
    pub active: bool,
    /// Header shows a remove button
    pub removable: bool,
    /// Pane content is mounted (visible or kept alive)
    pub rendered: bool,
}

/// Editing affordances of the editable card variant
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableView {
    pub show_add: bool,
    pub add_icon: Option<Vec<VNode>>,
    pub remove_icon: Option<Vec<VNode>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsView {
    pub id: String,
    pub prefix_cls: String,
    pub tabs: Vec<TabView>,
    pub active_key: Option<Key>,
    pub presentation: Presentation,
    pub editable: Option<EditableView>,
    pub locale: TabsLocale,
    pub centered: bool,
    pub tab_bar_gutter: Option<u32>,
    pub extra_content: Option<ExtraContent>,
    pub more_icon: Option<Vec<VNode>>,
}

impl TabsView {
    pub fn active_tab(&self) -> Option<&TabView> {
        self.tabs.iter().find(|t| t.active)
    }

    /// Tabs whose pane content is mounted
    pub fn rendered_panels(&self) -> impl Iterator<Item = &TabView> {
        self.tabs.iter().filter(|t| t.rendered)
    }
}

/// External navigation-list and panel-list renderers
pub trait TabsRenderer {
    type Output;

    fn render_nav_list(&mut self, view: &TabsView) -> Self::Output;

    fn render_panel_list(&mut self, view: &TabsView) -> Self::Output;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<O> {
    pub nav: O,
    pub panels: O,
}
