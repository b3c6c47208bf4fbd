#![forbid(unsafe_code)]

//! Axis-aligned rectangle anchored at its bottom-left corner.
//!
//! `Rect` is a plain value: every transform returns a new rectangle and leaves
//! the receiver untouched. The y axis points up, so `top` is `y + height`.
//!
//! # Example
//!
//! ```
//! use cellgrid_core::geometry::Rect;
//!
//! let button = Rect::new(0.0, 0.0, 100.0, 50.0);
//! let placed = button.align_top(300.0).align_left(20.0);
//!
//! assert_eq!(placed.top(), 300.0);
//! assert_eq!(placed.left(), 20.0);
//! assert_eq!(placed.size(), button.size());
//! ```

use serde::{Deserialize, Serialize};

/// An immutable rectangle: `(x, y)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// The zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle of the given size at the origin.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// `(center_x, center_y)`.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.center_x(), self.center_y())
    }

    /// `(width, height)`.
    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Bottom-left corner as `(x, y)`.
    #[inline]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Whether the rectangle covers no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Translate by `(dx, dy)`. Size is unchanged.
    #[inline]
    #[must_use]
    pub fn move_by(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Whether the point lies strictly inside.
    ///
    /// All four edges are excluded: a point on the boundary does not collide.
    #[inline]
    pub fn collide_with_point(&self, x: f64, y: f64) -> bool {
        self.left() < x && x < self.right() && self.bottom() < y && y < self.top()
    }

    /// Multiply every component by `factor`, truncating each toward zero.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(
            (self.x * factor).trunc(),
            (self.y * factor).trunc(),
            (self.width * factor).trunc(),
            (self.height * factor).trunc(),
        )
    }

    /// Replace width and/or height, keeping the bottom-left corner.
    ///
    /// `None` keeps the current value. So does `Some(0.0)`: a zero dimension
    /// is treated as "not given".
    #[must_use]
    pub fn resize(&self, width: Option<f64>, height: Option<f64>) -> Self {
        let pick = |new: Option<f64>, current: f64| match new {
            Some(v) if v != 0.0 => v,
            _ => current,
        };
        Self::new(
            self.x,
            self.y,
            pick(width, self.width),
            pick(height, self.height),
        )
    }

    /// Shift vertically so that `top == value`.
    #[inline]
    #[must_use]
    pub fn align_top(&self, value: f64) -> Self {
        self.move_by(0.0, value - self.top())
    }

    /// Shift vertically so that `bottom == value`.
    #[inline]
    #[must_use]
    pub fn align_bottom(&self, value: f64) -> Self {
        self.move_by(0.0, value - self.bottom())
    }

    /// Shift horizontally so that `left == value`.
    #[inline]
    #[must_use]
    pub fn align_left(&self, value: f64) -> Self {
        self.move_by(value - self.left(), 0.0)
    }

    /// Shift horizontally so that `right == value`.
    #[inline]
    #[must_use]
    pub fn align_right(&self, value: f64) -> Self {
        self.move_by(value - self.right(), 0.0)
    }

    /// Shift horizontally so that `center_x == value`.
    #[inline]
    #[must_use]
    pub fn align_center_x(&self, value: f64) -> Self {
        self.move_by(value - self.center_x(), 0.0)
    }

    /// Shift vertically so that `center_y == value`.
    #[inline]
    #[must_use]
    pub fn align_center_y(&self, value: f64) -> Self {
        self.move_by(0.0, value - self.center_y())
    }

    /// Shift so that the center lands on `(center_x, center_y)`.
    #[inline]
    #[must_use]
    pub fn align_center(&self, center_x: f64, center_y: f64) -> Self {
        self.move_by(center_x - self.center_x(), center_y - self.center_y())
    }
}
