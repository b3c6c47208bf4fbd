#![forbid(unsafe_code)]

//! Core: rectangle geometry and the widget capability.
//!
//! # Role in cellgrid
//! `cellgrid-core` is the leaf crate. It owns the immutable [`geometry::Rect`]
//! value type and the [`widget::Widget`] capability that layouts place.
//!
//! # Primary responsibilities
//! - **Rect**: bottom-left anchored box with pure align/move/scale transforms.
//! - **Widget**: anything exposing a natural size and a mutable current rect.
//! - **WidgetArena**: generational storage that hands out stable [`widget::WidgetId`]s.
//!
//! # How it fits in the system
//! `cellgrid-layout` keys its cell assignments by `WidgetId` and mutates widgets
//! through the arena during a layout pass. Nothing here knows about grids.

pub mod geometry;
pub mod logging;
pub mod widget;

pub use geometry::Rect;
pub use widget::{Widget, WidgetArena, WidgetId};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
