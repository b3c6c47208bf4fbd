#![forbid(unsafe_code)]

//! Construction-time grid configuration.
//!
//! `GridConfig` is the serializable form of everything [`crate::GridLayout`]
//! needs before widgets are added. Every field has a default, so a config
//! document only lists what it changes:
//!
//! ```
//! use cellgrid_layout::GridConfig;
//!
//! let config = GridConfig::from_json_str(
//!     r#"{ "column_count": 3, "row_count": 3, "horizontal_spacing": 20 }"#,
//! ).unwrap();
//! assert_eq!(config.column_count, 3);
//! assert_eq!(config.vertical_spacing, 0.0);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::align::{HorizontalAlign, Placement, VerticalAlign};
use crate::error::{Axis, GridError};

/// Serializable grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Initial left edge.
    pub x: f64,
    /// Initial bottom edge.
    pub y: f64,
    pub align_horizontal: HorizontalAlign,
    pub align_vertical: VerticalAlign,
    /// Gap between adjacent columns.
    pub horizontal_spacing: f64,
    /// Gap between adjacent rows.
    pub vertical_spacing: f64,
    pub column_count: usize,
    pub row_count: usize,
    pub placement: Placement,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            align_horizontal: HorizontalAlign::Center,
            align_vertical: VerticalAlign::Center,
            horizontal_spacing: 0.0,
            vertical_spacing: 0.0,
            column_count: 1,
            row_count: 1,
            placement: Placement::Cell,
        }
    }
}

impl GridConfig {
    /// Check counts and spacing.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.column_count == 0 {
            return Err(GridError::ZeroColumns);
        }
        if self.row_count == 0 {
            return Err(GridError::ZeroRows);
        }
        validate_spacing(Axis::Horizontal, self.horizontal_spacing)?;
        validate_spacing(Axis::Vertical, self.vertical_spacing)?;
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, GridError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GridError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, GridError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub(crate) fn validate_spacing(axis: Axis, value: f64) -> Result<(), GridError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidSpacing { axis, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_single_cell() {
        let config = GridConfig::default();
        assert_eq!(config.column_count, 1);
        assert_eq!(config.row_count, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        let config = GridConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn full_document() {
        let config = GridConfig::from_json_str(
            r#"{
                "x": 300, "y": 100,
                "align_horizontal": "left", "align_vertical": "bottom",
                "horizontal_spacing": 20, "vertical_spacing": 10,
                "column_count": 3, "row_count": 2,
                "placement": "insertion-order"
            }"#,
        )
        .unwrap();
        assert_eq!(config.x, 300.0);
        assert_eq!(config.y, 100.0);
        assert_eq!(config.align_horizontal, HorizontalAlign::Left);
        assert_eq!(config.align_vertical, VerticalAlign::Bottom);
        assert_eq!(config.horizontal_spacing, 20.0);
        assert_eq!(config.vertical_spacing, 10.0);
        assert_eq!(config.column_count, 3);
        assert_eq!(config.row_count, 2);
        assert_eq!(config.placement, Placement::InsertionOrder);
    }

    #[test]
    fn rejects_zero_counts() {
        assert!(matches!(
            GridConfig::from_json_str(r#"{"column_count": 0}"#),
            Err(GridError::ZeroColumns)
        ));
        assert!(matches!(
            GridConfig::from_json_str(r#"{"row_count": 0}"#),
            Err(GridError::ZeroRows)
        ));
    }

    #[test]
    fn rejects_negative_spacing() {
        let config = GridConfig {
            vertical_spacing: -2.0,
            ..GridConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidSpacing {
                axis: Axis::Vertical,
                ..
            })
        ));
        let config = GridConfig {
            horizontal_spacing: f64::NAN,
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_fields_and_names() {
        assert!(matches!(
            GridConfig::from_json_str(r#"{"colums": 2}"#),
            Err(GridError::ConfigParse(_))
        ));
        assert!(matches!(
            GridConfig::from_json_str(r#"{"align_vertical": "middle"}"#),
            Err(GridError::ConfigParse(_))
        ));
    }

    #[test]
    fn json_round_trip() {
        let config = GridConfig {
            column_count: 4,
            horizontal_spacing: 5.0,
            ..GridConfig::default()
        };
        let text = config.to_json_pretty().unwrap();
        assert_eq!(GridConfig::from_json_str(&text).unwrap(), config);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GridConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, GridError::ConfigIo { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
