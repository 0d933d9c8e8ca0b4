//! Active Tab Selection
//!
//! The active key can be owned by the caller (controlled) or by the widget.
//! ```text
//! controlled value ──┐
//!                    ├─> merged key ──> reconcile(tabs) on every tab-list change
//! internal value ────┘
//! ```
//! When the merged key disappears from the tab list, the tab now sitting at
//! the previous index (clamped to the list) becomes active.

use serde::{Deserialize, Serialize};

use crate::node::Key;
use crate::tab::Tab;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Value supplied by the caller, if any
    controlled: Option<Key>,
    /// Value the widget tracks on its own
    internal: Option<Key>,
    /// Effective active key
    merged: Option<Key>,
    /// Index of the merged key at the last reconciliation
    index: usize,
}

impl SelectionState {
    /// Controlled value first, then the default, then the first tab.
    pub fn new(controlled: Option<Key>, default: Option<Key>, tabs: &[Tab]) -> Self {
        let initial = controlled
            .clone()
            .or(default)
            .or_else(|| tabs.first().map(|t| t.key.clone()));

        let index = initial
            .as_ref()
            .and_then(|key| position(tabs, key))
            .unwrap_or(0);

        Self {
            controlled,
            internal: initial.clone(),
            merged: initial,
            index,
        }
    }

    /// The currently active key
    pub fn merged(&self) -> Option<&Key> {
        self.merged.as_ref()
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Index of the active tab as of the last reconciliation
    pub fn index(&self) -> usize {
        self.index
    }

    /// A new value from the caller. `None` hands control back to the widget.
    /// Re-supplying the same key restores it after a reconciliation replaced it.
    pub fn set_controlled(&mut self, value: Option<Key>) {
        if self.controlled == value && (value.is_none() || self.merged == value) {
            return;
        }

        tracing::debug!(
            from = ?self.controlled,
            to = ?value,
            "Controlled active key changed"
        );

        self.controlled = value.clone();
        self.internal = value;
        self.merged = self.controlled.clone().or_else(|| self.internal.clone());
    }

    /// User selection. A controlled widget only records the request; the
    /// merged key follows once the caller feeds the new value back.
    /// Returns whether the merged key changed.
    pub fn select(&mut self, key: Key, tabs: &[Tab]) -> bool {
        let before = self.merged.clone();

        self.internal = Some(key);
        if self.controlled.is_none() {
            self.merged = self.internal.clone();
        }

        if let Some(found) = self.merged.as_ref().and_then(|key| position(tabs, key)) {
            self.index = found;
        }

        before != self.merged
    }

    /// Re-validate the merged key against a new tab list.
    /// Returns the reassigned key if the old one was gone.
    pub fn reconcile(&mut self, tabs: &[Tab]) -> Option<Key> {
        if let Some(found) = self.merged.as_ref().and_then(|key| position(tabs, key)) {
            self.index = found;
            return None;
        }

        let clamped = self.index.min(tabs.len().saturating_sub(1));
        let replacement = tabs.get(clamped).map(|t| t.key.clone());

        tracing::debug!(
            from = ?self.merged,
            to = ?replacement,
            index = clamped,
            "Active tab no longer present, reassigning"
        );

        self.merged = replacement.clone();
        self.index = clamped;
        replacement
    }
}

fn position(tabs: &[Tab], key: &Key) -> Option<usize> {
    tabs.iter().position(|t| &t.key == key)
}
