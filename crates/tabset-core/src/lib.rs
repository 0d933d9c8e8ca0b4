//! Tabset Core
//!
//! A headless tabs widget. Rust owns the widget state; drawing the tab bar
//! and the panes is left to renderers that read a `TabsView` and report
//! interactions back.

mod config;
mod error;
mod events;
mod tabs;
mod view;

pub use config::{ExtraContent, TabsConfig, TabsLocale, TabsSlots, DEFAULT_PREFIX_CLS};
pub use error::CoreError;
pub use events::{
    EditAction, EditTarget, EventSource, InteractionEvent, NoopListener, ScrollDirection,
    TabsListener,
};
pub use tabs::Tabs;
pub use view::{EditableView, Rendered, TabView, TabsRenderer, TabsView};

// Re-export the building blocks
pub use tabset_presentation::{
    AccessibilityId, Animated, AnimatedConfig, DeviceProbe, Direction, FixedDevice, Presentation,
    PresentationError, PresentationProps, TabPosition, TabsSize, TabsType, ViewportProbe,
};
pub use tabset_tabs::{Element, Key, Label, SelectionState, Tab, TabError, VNode};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
