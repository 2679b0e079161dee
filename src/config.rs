//! Presentation settings read from the user's config file.
//!
//! All of these are knobs for downstream formatters and GUIs; none of them
//! change how a diff is computed.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-provided presentation options, usually loaded from a JSON file in the
/// user's home directory. Every field is optional; consumers apply their own
/// defaults for missing values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Number of context lines to show around changes.
    pub context: Option<i64>,
    /// Whether to render files missing on one side.
    pub show_empty: Option<bool>,
    /// Whether long unchanged stretches start out collapsed.
    pub should_collapse: Option<bool>,
    /// Whether to apply intra-line highlighting to edited pairs.
    pub highlight: Option<bool>,
    /// Opacity applied to unmodified lines, `0.0..=1.0`.
    pub unmodified_opacity: Option<f32>,
    /// Font size of the diff panes, in points.
    pub diff_font_size: Option<i32>,
}

/// Failure while loading a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    /// The config file is not valid JSON.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Loads the configuration from the JSON file at `path`.
    ///
    /// A missing file is not an error; it yields the all-defaults config so
    /// callers don't have to care whether the user ever wrote one.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::Config;

    #[test]
    fn parses_camel_case_fields() {
        let config: Config = serde_json::from_str(
            r#"{"context": 3, "showEmpty": true, "unmodifiedOpacity": 0.4}"#,
        )
        .unwrap();
        assert_eq!(config.context, Some(3));
        assert_eq!(config.show_empty, Some(true));
        assert_eq!(config.unmodified_opacity, Some(0.4));
        assert_eq!(config.diff_font_size, None);
    }

    #[test]
    fn missing_file_is_default() {
        let config = Config::load(Path::new("/nonexistent/pacha-diff-test-rc")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_file_content_is_an_error() {
        assert!(serde_json::from_str::<Config>("{not json").is_err());
    }
}
