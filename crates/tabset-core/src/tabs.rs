//! Tabs widget
//!
//! Owns the normalized tab list, the active selection and the derived
//! presentation of one widget instance. Renderers read `view()` and report
//! interactions back through the event methods.

use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

use tabset_presentation::{AccessibilityId, DeviceProbe, Presentation, ViewportProbe};
use tabset_tabs::{parse_tab_list, Key, SelectionState, Tab, TabError, VNode};

use crate::config::{TabsConfig, TabsSlots};
use crate::error::CoreError;
use crate::events::{
    EditAction, EditTarget, InteractionEvent, NoopListener, ScrollDirection, TabsListener,
};
use crate::view::{EditableView, Rendered, TabView, TabsRenderer, TabsView};
use crate::Result;

struct TabsInner {
    config: TabsConfig,
    slots: TabsSlots,
    children: Vec<VNode>,
    tabs: Vec<Tab>,
    selection: SelectionState,
    /// Keys whose pane has been shown at least once
    visited: HashSet<Key>,
    mobile: bool,
    id: AccessibilityId,
}

impl TabsInner {
    /// Bring the active key back in line with the tab list
    fn reconcile(&mut self) {
        if let Some(key) = self.selection.reconcile(&self.tabs) {
            tracing::debug!(tab_key = %key, "Active tab reassigned");
        }
        self.mark_visited();
    }

    fn mark_visited(&mut self) {
        if let Some(key) = self.selection.merged() {
            self.visited.insert(key.clone());
        }
    }

    fn presentation(&self) -> Presentation {
        Presentation::derive(&self.config.presentation, self.mobile)
    }

    fn find(&self, key: &Key) -> Result<&Tab> {
        self.tabs
            .iter()
            .find(|t| &t.key == key)
            .ok_or_else(|| TabError::NotFound(key.to_string()).into())
    }

    fn is_pane_rendered(&self, tab: &Tab, active: bool) -> bool {
        let destroy = self.config.destroy_inactive_tab_pane || tab.destroy_inactive_content;
        active || tab.force_render || (!destroy && self.visited.contains(&tab.key))
    }

    fn ensure_editable(&self) -> Result<()> {
        let tabs_type = self.config.presentation.tabs_type;
        if tabs_type.is_editable() {
            Ok(())
        } else {
            Err(CoreError::NotEditable(tabs_type.as_str().to_string()))
        }
    }
}

pub struct Tabs {
    inner: Arc<RwLock<TabsInner>>,
    listener: Arc<dyn TabsListener>,
}

impl Tabs {
    pub fn new(config: TabsConfig, children: Vec<VNode>) -> Self {
        let tabs = parse_tab_list(&children);
        let selection = SelectionState::new(
            config.active_key.clone(),
            config.default_active_key.clone(),
            &tabs,
        );
        let id = AccessibilityId::resolve(config.id.as_deref(), &config.prefix_cls);

        let mut inner = TabsInner {
            config,
            slots: TabsSlots::default(),
            children,
            tabs,
            selection,
            visited: HashSet::new(),
            mobile: false,
            id,
        };
        inner.reconcile();

        tracing::debug!(
            id = %inner.id,
            tabs = inner.tabs.len(),
            active = ?inner.selection.merged(),
            "Created tabs"
        );

        Self {
            inner: Arc::new(RwLock::new(inner)),
            listener: Arc::new(NoopListener),
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn TabsListener>) -> Self {
        self.listener = listener;
        self
    }

    pub fn with_slots(self, slots: TabsSlots) -> Self {
        self.inner.write().slots = slots;
        self
    }

    pub fn with_device(self, probe: &dyn DeviceProbe) -> Self {
        self.refresh_device(probe);
        self
    }

    /// Replace the declared children
    pub fn set_children(&self, children: Vec<VNode>) {
        let mut inner = self.inner.write();
        inner.tabs = parse_tab_list(&children);
        inner.children = children;

        let TabsInner { tabs, visited, .. } = &mut *inner;
        visited.retain(|key| tabs.iter().any(|t| &t.key == key));

        inner.reconcile();
    }

    /// Replace the props
    pub fn set_config(&self, config: TabsConfig) {
        let mut inner = self.inner.write();

        inner.selection.set_controlled(config.active_key.clone());
        if inner.config.id != config.id {
            inner.id = AccessibilityId::resolve(config.id.as_deref(), &config.prefix_cls);
        }

        inner.config = config;
        inner.reconcile();
    }

    pub fn set_slots(&self, slots: TabsSlots) {
        self.inner.write().slots = slots;
    }

    /// Controlled value from the owner; `None` hands selection back to the widget
    pub fn set_active_key(&self, key: Option<Key>) {
        let mut inner = self.inner.write();
        inner.config.active_key = key.clone();
        inner.selection.set_controlled(key);
        inner.reconcile();
    }

    pub fn set_mobile(&self, mobile: bool) {
        let mut inner = self.inner.write();
        if inner.mobile != mobile {
            tracing::debug!(id = %inner.id, mobile, "Mobile layout changed");
            inner.mobile = mobile;
        }
    }

    pub fn refresh_device(&self, probe: &dyn DeviceProbe) {
        self.set_mobile(probe.is_mobile());
    }

    /// Re-evaluate the mobile flag against the configured breakpoint
    pub fn refresh_viewport(&self, width: u32) {
        let breakpoint = self.inner.read().config.mobile_breakpoint;
        self.refresh_device(&ViewportProbe::new(width).with_breakpoint(breakpoint));
    }

    pub fn config(&self) -> TabsConfig {
        self.inner.read().config.clone()
    }

    pub fn children(&self) -> Vec<VNode> {
        self.inner.read().children.clone()
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.inner.read().tabs.clone()
    }

    pub fn get_tab(&self, key: &Key) -> Result<Tab> {
        self.inner.read().find(key).cloned()
    }

    pub fn active_key(&self) -> Option<Key> {
        self.inner.read().selection.merged().cloned()
    }

    pub fn active_tab(&self) -> Option<Tab> {
        let inner = self.inner.read();
        let key = inner.selection.merged()?;
        inner.tabs.iter().find(|t| &t.key == key).cloned()
    }

    pub fn id(&self) -> String {
        self.inner.read().id.to_string()
    }

    pub fn is_mobile(&self) -> bool {
        self.inner.read().mobile
    }

    pub fn presentation(&self) -> Presentation {
        self.inner.read().presentation()
    }

    /// A header was clicked. Disabled tabs ignore clicks.
    pub fn click_tab(&self, key: &Key, event: InteractionEvent) -> Result<()> {
        let tab = self.get_tab(key)?;
        if tab.disabled {
            tracing::debug!(tab_key = %key, "Ignoring click on disabled tab");
            return Ok(());
        }

        self.listener.on_tab_click(key, &event);

        let changed = {
            let mut inner = self.inner.write();
            let changed = inner.selection.merged() != Some(key);
            let TabsInner { selection, tabs, .. } = &mut *inner;
            selection.select(key.clone(), tabs);
            inner.mark_visited();
            changed
        };

        if changed {
            tracing::debug!(tab_key = %key, "Active tab changed");
            self.listener.on_update_active_key(key);
            self.listener.on_change(key);
        }

        Ok(())
    }

    /// The add button of the editable variant was pressed
    pub fn add_tab(&self, event: InteractionEvent) -> Result<()> {
        {
            let inner = self.inner.read();
            inner.ensure_editable()?;
            if inner.config.hide_add {
                return Err(CoreError::AddHidden);
            }
        }

        tracing::debug!("Add tab requested");
        self.listener.on_edit(&EditTarget::Event(event), EditAction::Add);
        Ok(())
    }

    /// The remove button of a tab was pressed. The owner decides whether the
    /// tab goes away by updating the children.
    pub fn remove_tab(&self, key: &Key) -> Result<()> {
        {
            let inner = self.inner.read();
            inner.ensure_editable()?;
            let tab = inner.find(key)?;
            if !tab.is_removable(true) {
                return Err(TabError::NotRemovable(key.to_string()).into());
            }
        }

        tracing::debug!(tab_key = %key, "Remove tab requested");
        self.listener
            .on_edit(&EditTarget::Key(key.clone()), EditAction::Remove);
        Ok(())
    }

    pub fn scroll(&self, direction: ScrollDirection) {
        self.listener.on_tab_scroll(direction);
    }

    pub fn prev_click(&self, event: InteractionEvent) {
        self.listener.on_prev_click(&event);
    }

    pub fn next_click(&self, event: InteractionEvent) {
        self.listener.on_next_click(&event);
    }

    /// Snapshot for the renderers
    pub fn view(&self) -> TabsView {
        let inner = self.inner.read();
        let presentation = inner.presentation();
        let editable = presentation.is_editable();
        let active_key = inner.selection.merged().cloned();

        let tabs = inner
            .tabs
            .iter()
            .map(|tab| {
                let active = active_key.as_ref() == Some(&tab.key);
                TabView {
                    tab_id: inner.id.tab_id(tab.key.as_str()),
                    panel_id: inner.id.panel_id(tab.key.as_str()),
                    active,
                    removable: tab.is_removable(editable),
                    rendered: inner.is_pane_rendered(tab, active),
                    tab: tab.clone(),
                }
            })
            .collect();

        let editable = editable.then(|| EditableView {
            show_add: !inner.config.hide_add,
            add_icon: inner.slots.add_icon.clone(),
            remove_icon: inner.slots.remove_icon.clone(),
        });

        TabsView {
            id: inner.id.to_string(),
            prefix_cls: inner.config.prefix_cls.clone(),
            tabs,
            active_key,
            presentation,
            editable,
            locale: inner.config.locale.clone(),
            centered: inner.config.centered,
            tab_bar_gutter: inner.config.tab_bar_gutter,
            extra_content: inner.slots.tab_bar_extra_content.clone(),
            more_icon: inner.slots.more_icon.clone(),
        }
    }

    /// Hand the current view to the navigation list, then to the panel list
    pub fn render<R: TabsRenderer>(&self, renderer: &mut R) -> Rendered<R::Output> {
        let view = self.view();
        Rendered {
            nav: renderer.render_nav_list(&view),
            panels: renderer.render_panel_list(&view),
        }
    }
}

impl Clone for Tabs {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            listener: Arc::clone(&self.listener),
        }
    }
}
