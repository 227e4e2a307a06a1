//! Configuration loading and CLI merging
//!
//! Precedence: command-line flag, then config file, then built-in default.

use super::schema::TileConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config '{path}': {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub columns: Option<u32>,
    pub rows: Option<u32>,
    pub pad: Option<u32>,
    pub background: Option<String>,
    pub stroke: Option<String>,
    pub fill: Option<String>,
    pub line_width: Option<f64>,
}

impl CliOverrides {
    /// Copy every set override into `config`.
    pub fn apply(&self, config: &mut TileConfig) {
        if let Some(width) = self.width {
            config.canvas.width = width;
        }
        if let Some(height) = self.height {
            config.canvas.height = height;
        }
        if let Some(columns) = self.columns {
            config.grid.columns = columns;
        }
        if let Some(rows) = self.rows {
            config.grid.rows = rows;
        }
        if let Some(pad) = self.pad {
            config.grid.pad = pad;
        }
        if let Some(ref background) = self.background {
            config.style.background = background.clone();
        }
        if let Some(ref stroke) = self.stroke {
            config.style.stroke = stroke.clone();
        }
        if let Some(ref fill) = self.fill {
            config.style.fill = fill.clone();
        }
        if let Some(line_width) = self.line_width {
            config.style.line_width = line_width;
        }
    }
}

/// Parse configuration from TOML text. Does not validate.
pub fn parse_config(contents: &str) -> Result<TileConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Load configuration from a file. Does not validate.
pub fn load_config_file(path: &Path) -> Result<TileConfig, ConfigError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    parse_config(&contents)
}

/// Build the effective configuration for one run.
///
/// Loads `path` if given (defaults otherwise), applies `overrides`, then
/// validates the merged result.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<TileConfig, ConfigError> {
    let mut config = match path {
        Some(p) => load_config_file(p)?,
        None => TileConfig::default(),
    };
    overrides.apply(&mut config);

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_without_file() {
        let config = resolve_config(None, &CliOverrides::default()).unwrap();
        assert_eq!(config, TileConfig::default());
    }

    #[test]
    fn test_overrides_beat_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tileimg.toml");
        fs::write(&path, "[grid]\ncolumns = 8\nrows = 2\n\n[style]\nfill = \"red\"\n").unwrap();

        let overrides = CliOverrides {
            rows: Some(3),
            fill: Some("blue".to_string()),
            ..Default::default()
        };
        let config = resolve_config(Some(&path), &overrides).unwrap();

        assert_eq!(config.grid.columns, 8);
        assert_eq!(config.grid.rows, 3);
        assert_eq!(config.style.fill, "blue");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let err = resolve_config(Some(&path), &CliOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let err = parse_config("[grid\ncolumns = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_after_overrides() {
        let overrides = CliOverrides { columns: Some(0), ..Default::default() };
        let err = resolve_config(None, &overrides).unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors, vec!["grid.columns: must be a positive integer".to_string()]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_message_format() {
        let err = ConfigError::Validation(vec!["a: b".to_string(), "c: d".to_string()]);
        assert_eq!(err.to_string(), "Config validation failed:\n  - a: b\n  - c: d");
    }
}
