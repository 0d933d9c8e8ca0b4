//! Accessibility ids
//!
//! Each widget instance needs a document-unique id so headers can point at
//! their panes (`aria-controls`). Ids come from one process-wide counter.

use std::sync::atomic::{AtomicU64, Ordering};

static ID_SEED: AtomicU64 = AtomicU64::new(0);

/// Next value of the process-wide counter
pub fn next_id_seed() -> u64 {
    ID_SEED.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessibilityId(String);

impl AccessibilityId {
    /// Use `explicit` when given, otherwise generate `{prefix}-{n}`.
    /// Only a generated id consumes a counter value.
    pub fn resolve(explicit: Option<&str>, prefix: &str) -> Self {
        match explicit {
            Some(id) if !id.is_empty() => Self(id.to_string()),
            _ => Self(format!("{}-{}", prefix, next_id_seed())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the header for `key`
    pub fn tab_id(&self, key: &str) -> String {
        format!("{}-tab-{}", self.0, key)
    }

    /// Id of the pane for `key`
    pub fn panel_id(&self, key: &str) -> String {
        format!("{}-panel-{}", self.0, key)
    }
}

impl std::fmt::Display for AccessibilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
