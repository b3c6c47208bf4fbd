#![forbid(unsafe_code)]

//! cellgrid demo library.
//!
//! Exposes the demo scene and CLI so integration tests can build the scene,
//! settle it, and assert on the resulting placement.
//!
//! # How it fits in the system
//! The demo is the only consumer of both `cellgrid-core` and
//! `cellgrid-layout` that plays the parent-container role: it owns the
//! widget arena, anchors the grid inside a window, and drives layout passes.

pub mod anchor;
pub mod cli;
pub mod scene;
