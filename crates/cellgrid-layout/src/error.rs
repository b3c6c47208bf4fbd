#![forbid(unsafe_code)]

//! Error types for grid construction, configuration, and cell checks.
//!
//! A layout pass itself has no error path. Everything here is reported before
//! `do_layout` runs: bad configuration, a cell that does not fit the grid, or
//! an alignment name that does not parse.

use std::fmt;
use std::io;
use std::path::PathBuf;

use cellgrid_core::WidgetId;

/// Which spacing value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Errors produced while building or validating a grid.
#[derive(Debug)]
pub enum GridError {
    /// `column_count` was zero.
    ZeroColumns,
    /// `row_count` was zero.
    ZeroRows,
    /// Spacing was negative, NaN, or infinite.
    InvalidSpacing { axis: Axis, value: f64 },
    /// A widget is assigned to a cell outside the grid.
    CellOutOfBounds {
        id: WidgetId,
        column: usize,
        row: usize,
        column_count: usize,
        row_count: usize,
    },
    /// An alignment or placement name was not recognized.
    UnknownName { kind: &'static str, value: String },
    /// A configuration file could not be read.
    ConfigIo { path: PathBuf, source: io::Error },
    /// A configuration document was not valid JSON for [`crate::GridConfig`].
    ConfigParse(serde_json::Error),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "grid needs at least one column"),
            Self::ZeroRows => write!(f, "grid needs at least one row"),
            Self::InvalidSpacing { axis, value } => {
                write!(f, "{axis} spacing must be finite and non-negative, got {value}")
            }
            Self::CellOutOfBounds {
                id,
                column,
                row,
                column_count,
                row_count,
            } => write!(
                f,
                "widget {id:?} assigned to cell ({column}, {row}) outside a {column_count}x{row_count} grid"
            ),
            Self::UnknownName { kind, value } => write!(f, "unknown {kind}: {value:?}"),
            Self::ConfigIo { path, source } => {
                write!(f, "cannot read grid config {}: {source}", path.display())
            }
            Self::ConfigParse(err) => write!(f, "invalid grid config: {err}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigIo { source, .. } => Some(source),
            Self::ConfigParse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse(err)
    }
}
