//! File-based configuration loading.
//!
//! Config files are TOML with every key optional:
//!
//! ```toml
//! width = 132
//! height = 43
//! title = "nethack ascension"
//! strict = true
//! format = "asciicast"
//! ```

use std::path::Path;

use serde::Deserialize;

use super::OutputFormat;
use crate::error::{CastError, Result};

/// Values read from a config file. Unset keys leave defaults alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Terminal width.
    pub width: Option<u16>,
    /// Terminal height.
    pub height: Option<u16>,
    /// Header command.
    pub command: Option<String>,
    /// Header title.
    pub title: Option<String>,
    /// Strict header handling.
    pub strict: Option<bool>,
    /// Pretty-printed JSON.
    pub pretty: Option<bool>,
    /// Output format.
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Parse TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CastError::config(e.to_string()))
    }

    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CastError::io_context(format!("reading config file {}", path.display()), e)
        })?;
        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full() {
        let config = FileConfig::parse(
            r#"
            width = 132
            height = 43
            command = "nethack"
            title = "run"
            strict = true
            pretty = false
            format = "raw"
            "#,
        )
        .unwrap();
        assert_eq!(config.width, Some(132));
        assert_eq!(config.height, Some(43));
        assert_eq!(config.command.as_deref(), Some("nethack"));
        assert_eq!(config.strict, Some(true));
        assert_eq!(config.pretty, Some(false));
        assert_eq!(config.format, Some(OutputFormat::Raw));
    }

    #[test]
    fn parse_empty() {
        assert_eq!(FileConfig::parse("").unwrap(), FileConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = FileConfig::parse("colour = true").unwrap_err();
        assert!(matches!(err, CastError::Config { .. }));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(FileConfig::parse("width = \"wide\"").is_err());
        assert!(FileConfig::parse("width = 70000").is_err());
    }

    #[test]
    fn load_missing_file() {
        let err = FileConfig::load(Path::new("/nonexistent/ttycast.toml")).unwrap_err();
        assert!(matches!(err, CastError::IoWithContext { .. }));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ttycast.toml");
        std::fs::write(&path, "height = 50\n").unwrap();
        assert_eq!(FileConfig::load(&path).unwrap().height, Some(50));
    }
}
