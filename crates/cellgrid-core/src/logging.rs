#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros
//! used by the arena and by downstream crates. Without it the module is empty
//! and call sites compile their log statements out behind
//! `#[cfg(feature = "tracing")]`.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, info, trace, warn};
