//! Configuration schema types for tileimg TOML files
//!
//! Defines the structure, defaults and validation rules for render settings.

use crate::color::{ColorError, ColorTable};
use crate::grid::GridSpec;
use crate::renderer::Style;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canvas size section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasConfig {
    /// Image width in pixels
    #[serde(default = "default_size")]
    pub width: u32,
    /// Image height in pixels
    #[serde(default = "default_size")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: default_size(), height: default_size() }
    }
}

fn default_size() -> u32 {
    200
}

/// Grid partition section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Number of tile columns
    #[serde(default = "default_cells")]
    pub columns: u32,
    /// Number of tile rows
    #[serde(default = "default_cells")]
    pub rows: u32,
    /// Inward padding of each tile in pixels
    #[serde(default = "default_pad")]
    pub pad: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { columns: default_cells(), rows: default_cells(), pad: default_pad() }
    }
}

fn default_cells() -> u32 {
    4
}

fn default_pad() -> u32 {
    5
}

/// Colors and stroke section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_stroke")]
    pub stroke: String,
    /// Fill for tiles without a color prefix
    #[serde(default = "default_fill")]
    pub fill: String,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            stroke: default_stroke(),
            fill: default_fill(),
            line_width: default_line_width(),
        }
    }
}

fn default_background() -> String {
    "white".to_string()
}

fn default_stroke() -> String {
    "black".to_string()
}

fn default_fill() -> String {
    crate::color::NONE.to_string()
}

fn default_line_width() -> f64 {
    2.0
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TileConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub style: StyleConfig,
    /// User-defined color names, e.g. `brand = "#336699"`
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

/// Config validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Field path (e.g., "grid.columns")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl TileConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        let positive = [
            ("canvas.width", self.canvas.width),
            ("canvas.height", self.canvas.height),
            ("grid.columns", self.grid.columns),
            ("grid.rows", self.grid.rows),
        ];
        for (field, value) in positive {
            if value == 0 {
                errors.push(ConfigValidationError {
                    field: field.to_string(),
                    message: "must be a positive integer".to_string(),
                });
            }
        }

        let buffer_len = (self.canvas.width as usize)
            .checked_mul(self.canvas.height as usize)
            .and_then(|n| n.checked_mul(4));
        if buffer_len.is_none() {
            errors.push(ConfigValidationError {
                field: "canvas".to_string(),
                message: format!(
                    "{}x{} RGBA buffer does not fit in memory",
                    self.canvas.width, self.canvas.height
                ),
            });
        }

        if !self.style.line_width.is_finite() || self.style.line_width < 0.0 {
            errors.push(ConfigValidationError {
                field: "style.line_width".to_string(),
                message: "must be a non-negative number".to_string(),
            });
        }

        errors
    }

    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            columns: self.grid.columns,
            rows: self.grid.rows,
            width: self.canvas.width,
            height: self.canvas.height,
            pad: self.grid.pad,
        }
    }

    /// Built-in colors plus the `[colors]` section.
    pub fn color_table(&self) -> Result<ColorTable, ColorError> {
        ColorTable::with_custom(self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Resolve the style section's color names against `colors`.
    pub fn style(&self, colors: &ColorTable) -> Result<Style, ColorError> {
        Ok(Style {
            background: colors.resolve(&self.style.background)?,
            stroke: colors.resolve(&self.style.stroke)?,
            fill: colors.resolve(&self.style.fill)?,
            line_width: self.style.line_width,
        })
    }
}
