#![forbid(unsafe_code)]

//! Alignment of a widget inside its cell slot, and how slots are chosen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Horizontal position of a widget inside its column slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl HorizontalAlign {
    /// Map `"left"` and `"right"` to their variants and anything else to
    /// [`Self::Center`].
    ///
    /// Names must match exactly: `"c"`, `"Left"` and `" right"` all mean center.
    pub fn from_name_lenient(name: &str) -> Self {
        match name {
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Center,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl FromStr for HorizontalAlign {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(GridError::UnknownName {
                kind: "horizontal alignment",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for HorizontalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical position of a widget inside its row slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalAlign {
    /// Map `"top"` and `"bottom"` to their variants and anything else to
    /// [`Self::Center`]. Case and whitespace are not folded.
    pub fn from_name_lenient(name: &str) -> Self {
        match name {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            _ => Self::Center,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for VerticalAlign {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => Err(GridError::UnknownName {
                kind: "vertical alignment",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for VerticalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a widget's horizontal slot is chosen within its row.
///
/// Both modes size columns and rows the same way. They differ only in which
/// column slot a widget is placed into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// The slot of the widget's assigned column. Cells may be added in any
    /// order and may be left empty.
    #[default]
    Cell,
    /// The n-th widget added to a row goes into the n-th column slot,
    /// whatever column it was assigned. Matches `Cell` only when every row is
    /// filled left to right with one widget per cell.
    InsertionOrder,
}

impl Placement {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cell => "cell",
            Self::InsertionOrder => "insertion-order",
        }
    }
}

impl FromStr for Placement {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cell" => Ok(Self::Cell),
            "insertion-order" | "insertion_order" => Ok(Self::InsertionOrder),
            _ => Err(GridError::UnknownName {
                kind: "placement",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
