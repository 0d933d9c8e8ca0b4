//! Layout enums
//!
//! Tab position, text direction, size and widget variant, all parsed from
//! their lowercase prop spellings.

use serde::{Deserialize, Serialize};

use crate::error::PresentationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TabPosition {
    /// Left and right stack the tab headers vertically
    pub fn is_vertical(&self) -> bool {
        matches!(self, TabPosition::Left | TabPosition::Right)
    }

    /// Narrow viewports only keep vertical layouts; everything else moves to the top.
    pub fn effective(self, mobile: bool) -> Self {
        if mobile && !self.is_vertical() {
            TabPosition::Top
        } else {
            self
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabPosition::Top => "top",
            TabPosition::Bottom => "bottom",
            TabPosition::Left => "left",
            TabPosition::Right => "right",
        }
    }
}

impl std::fmt::Display for TabPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabPosition {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(TabPosition::Top),
            "bottom" => Ok(TabPosition::Bottom),
            "left" => Ok(TabPosition::Left),
            "right" => Ok(TabPosition::Right),
            _ => Err(PresentationError::UnknownValue {
                prop: "tabPosition",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl std::str::FromStr for Direction {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ltr" => Ok(Direction::Ltr),
            "rtl" => Ok(Direction::Rtl),
            _ => Err(PresentationError::UnknownValue {
                prop: "direction",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabsSize {
    Small,
    #[default]
    #[serde(alias = "default")]
    Middle,
    Large,
}

impl TabsSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabsSize::Small => "small",
            TabsSize::Middle => "middle",
            TabsSize::Large => "large",
        }
    }
}

impl std::str::FromStr for TabsSize {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(TabsSize::Small),
            "middle" | "default" => Ok(TabsSize::Middle),
            "large" => Ok(TabsSize::Large),
            _ => Err(PresentationError::UnknownValue {
                prop: "size",
                value: s.to_string(),
            }),
        }
    }
}

/// Widget variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabsType {
    #[default]
    Line,
    Card,
    EditableCard,
}

impl TabsType {
    /// Only the editable card variant lets users add and remove tabs
    pub fn is_editable(&self) -> bool {
        matches!(self, TabsType::EditableCard)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabsType::Line => "line",
            TabsType::Card => "card",
            TabsType::EditableCard => "editable-card",
        }
    }
}

impl std::str::FromStr for TabsType {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(TabsType::Line),
            "card" => Ok(TabsType::Card),
            "editable-card" => Ok(TabsType::EditableCard),
            _ => Err(PresentationError::UnknownValue {
                prop: "type",
                value: s.to_string(),
            }),
        }
    }
}
