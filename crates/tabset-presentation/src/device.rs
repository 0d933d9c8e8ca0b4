//! Mobile detection
//!
//! Detecting the device belongs to the host. The widget only asks one question.

/// Default width below which a viewport counts as mobile, in CSS pixels
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 576;

pub trait DeviceProbe {
    fn is_mobile(&self) -> bool;
}

/// Host already knows the answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedDevice(pub bool);

impl DeviceProbe for FixedDevice {
    fn is_mobile(&self) -> bool {
        self.0
    }
}

/// Viewport width compared against a breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportProbe {
    pub width: u32,
    pub breakpoint: u32,
}

impl ViewportProbe {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }

    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }
}

impl DeviceProbe for ViewportProbe {
    fn is_mobile(&self) -> bool {
        self.width < self.breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_breakpoint() {
        assert!(ViewportProbe::new(375).is_mobile());
        assert!(!ViewportProbe::new(576).is_mobile());
        assert!(!ViewportProbe::new(1280).is_mobile());
        assert!(ViewportProbe::new(800).with_breakpoint(1024).is_mobile());
    }

    #[test]
    fn test_fixed_device() {
        assert!(FixedDevice(true).is_mobile());
        assert!(!FixedDevice::default().is_mobile());
    }
}
