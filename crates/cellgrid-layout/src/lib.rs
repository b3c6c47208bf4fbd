#![forbid(unsafe_code)]

//! Grid layout for widgets.
//!
//! # Role in cellgrid
//! `cellgrid-layout` packs widgets into a uniform grid: every column is as wide
//! as its widest widget, every row as tall as its tallest, and each widget is
//! aligned inside its cell slot without being resized.
//!
//! # Primary responsibilities
//! - **GridLayout**: widget-to-cell assignments and the layout pass.
//! - **GridConfig**: serializable construction-time settings.
//! - **Alignment**: [`HorizontalAlign`], [`VerticalAlign`], and [`Placement`].
//! - **Layout**: the capability a parent container drives.
//!
//! # How it fits in the system
//! Widgets live in a [`cellgrid_core::WidgetArena`]; the grid only stores
//! their ids. A parent positions the grid with [`Layout::set_rect`], calls
//! [`Layout::do_layout`] after anything that could change sizes, and reads
//! the grid's resulting bounds back through [`Layout::rect`].

pub mod align;
pub mod config;
pub mod error;
pub mod grid;

pub use align::{HorizontalAlign, Placement, VerticalAlign};
pub use config::GridConfig;
pub use error::{Axis, GridError};
pub use grid::{Cell, GridLayout, GridMetrics};

use cellgrid_core::{Rect, Widget, WidgetArena};

/// A container that positions child widgets of type `W`.
///
/// The widget type is a trait parameter, so a parent can hold mixed layouts
/// as `Box<dyn Layout<W>>`.
pub trait Layout<W: Widget> {
    /// Current bounds, read by the parent for its own pass.
    fn rect(&self) -> Rect;

    /// Position the container. The next pass works from these bounds.
    fn set_rect(&mut self, rect: Rect);

    /// Recompute child placement and the container's own bounds.
    fn do_layout(&mut self, widgets: &mut WidgetArena<W>);
}
