//! Tabset Presentation
//!
//! Derived, never stored: everything here is recomputed from props and the
//! mobile flag whenever either changes.

mod animated;
mod device;
mod error;
mod id;
mod position;

pub use animated::{Animated, AnimatedConfig};
pub use device::{DeviceProbe, FixedDevice, ViewportProbe, DEFAULT_MOBILE_BREAKPOINT};
pub use error::PresentationError;
pub use id::{next_id_seed, AccessibilityId};
pub use position::{Direction, TabPosition, TabsSize, TabsType};

use serde::{Deserialize, Serialize};

/// Props that feed the presentation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationProps {
    pub animated: Option<Animated>,
    pub tab_position: TabPosition,
    pub direction: Direction,
    pub size: TabsSize,
    #[serde(rename = "type")]
    pub tabs_type: TabsType,
}

/// Shared presentation state handed to the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub animated: AnimatedConfig,
    /// Position after the mobile collapse
    pub tab_position: TabPosition,
    pub rtl: bool,
    pub mobile: bool,
    pub size: TabsSize,
    pub tabs_type: TabsType,
}

impl Presentation {
    pub fn derive(props: &PresentationProps, mobile: bool) -> Self {
        Self {
            animated: AnimatedConfig::resolve(props.animated.as_ref()),
            tab_position: props.tab_position.effective(mobile),
            rtl: props.direction.is_rtl(),
            mobile,
            size: props.size,
            tabs_type: props.tabs_type,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.tabs_type.is_editable()
    }
}
