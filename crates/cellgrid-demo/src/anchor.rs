#![forbid(unsafe_code)]

//! Anchor container: pins a child rect to an edge or center of its parent.

use cellgrid_core::Rect;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorX {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorY {
    #[default]
    Bottom,
    Center,
    Top,
}

/// Where a child sits inside its parent, plus an offset from that anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Anchor {
    pub anchor_x: AnchorX,
    pub anchor_y: AnchorY,
    /// Offset added to the horizontal anchor line.
    pub align_x: f64,
    /// Offset added to the vertical anchor line.
    pub align_y: f64,
}

impl Anchor {
    pub fn new(anchor_x: AnchorX, anchor_y: AnchorY, align_x: f64, align_y: f64) -> Self {
        Self {
            anchor_x,
            anchor_y,
            align_x,
            align_y,
        }
    }

    /// Translate `child` onto its anchor inside `parent`. Size is kept.
    pub fn place(&self, parent: Rect, child: Rect) -> Rect {
        let child = match self.anchor_x {
            AnchorX::Left => child.align_left(parent.left() + self.align_x),
            AnchorX::Center => child.align_center_x(parent.center_x() + self.align_x),
            AnchorX::Right => child.align_right(parent.right() + self.align_x),
        };
        match self.anchor_y {
            AnchorY::Bottom => child.align_bottom(parent.bottom() + self.align_y),
            AnchorY::Center => child.align_center_y(parent.center_y() + self.align_y),
            AnchorY::Top => child.align_top(parent.top() + self.align_y),
        }
    }
}
