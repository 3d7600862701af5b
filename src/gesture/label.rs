use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete per-frame gesture outcome. Serializes to the display strings
/// consumers match on (`"Swipe Left"`, `"Option 3"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GestureLabel {
    #[default]
    None,
    #[serde(rename = "Swipe Left")]
    SwipeLeft,
    #[serde(rename = "Swipe Right")]
    SwipeRight,
    #[serde(rename = "Zoom In")]
    ZoomIn,
    #[serde(rename = "Zoom Out")]
    ZoomOut,
    #[serde(rename = "Option 1")]
    Option1,
    #[serde(rename = "Option 2")]
    Option2,
    #[serde(rename = "Option 3")]
    Option3,
    #[serde(rename = "Option 4")]
    Option4,
    #[serde(rename = "Option 5")]
    Option5,
    Drawing,
}

impl GestureLabel {
    /// `Option {count}` for 1..=5 extended fingers, `None` otherwise
    pub fn option(count: usize) -> Self {
        match count {
            1 => Self::Option1,
            2 => Self::Option2,
            3 => Self::Option3,
            4 => Self::Option4,
            5 => Self::Option5,
            _ => Self::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::SwipeLeft => "Swipe Left",
            Self::SwipeRight => "Swipe Right",
            Self::ZoomIn => "Zoom In",
            Self::ZoomOut => "Zoom Out",
            Self::Option1 => "Option 1",
            Self::Option2 => "Option 2",
            Self::Option3 => "Option 3",
            Self::Option4 => "Option 4",
            Self::Option5 => "Option 5",
            Self::Drawing => "Drawing",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::None
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
