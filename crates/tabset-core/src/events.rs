//! Event bridge types
//!
//! Renderers report raw interactions to `Tabs`; `Tabs` updates its state and
//! notifies the owner through a `TabsListener`.

use serde::{Deserialize, Serialize};

use tabset_tabs::Key;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    #[default]
    Mouse,
    Keyboard,
    Touch,
}

/// A user interaction as reported by a renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub source: EventSource,
}

impl InteractionEvent {
    pub fn mouse() -> Self {
        Self {
            source: EventSource::Mouse,
        }
    }

    pub fn keyboard() -> Self {
        Self {
            source: EventSource::Keyboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditAction {
    Add,
    Remove,
}

impl EditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditAction::Add => "add",
            EditAction::Remove => "remove",
        }
    }
}

impl std::fmt::Display for EditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What an edit refers to: the triggering event for `Add`, the tab for `Remove`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditTarget {
    Event(InteractionEvent),
    Key(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Left,
    Right,
    Top,
    Bottom,
}

/// Outward notifications. Every method defaults to doing nothing.
///
/// Callbacks run after `Tabs` has released its internal lock, so a listener
/// may call back into the widget (a controlled owner typically answers
/// `on_update_active_key` with `Tabs::set_active_key`).
pub trait TabsListener: Send + Sync {
    fn on_tab_click(&self, _key: &Key, _event: &InteractionEvent) {}

    fn on_change(&self, _key: &Key) {}

    fn on_update_active_key(&self, _key: &Key) {}

    fn on_edit(&self, _target: &EditTarget, _action: EditAction) {}

    fn on_tab_scroll(&self, _direction: ScrollDirection) {}

    fn on_prev_click(&self, _event: &InteractionEvent) {}

    fn on_next_click(&self, _event: &InteractionEvent) {}
}

/// Listener that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl TabsListener for NoopListener {}
