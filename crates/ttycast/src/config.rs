//! Configuration types for ttycast.
//!
//! Values are layered, lowest precedence first: built-in defaults, a TOML
//! file ([`file`]), `TTYCAST_*` environment variables ([`env`]), and finally
//! whatever the caller sets explicitly.

pub mod env;
pub mod file;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{CastError, Result};

pub use env::EnvConfig;
use env::vars;
pub use file::FileConfig;

/// Asciicast format version written in the header.
pub const CAST_VERSION: u8 = 1;

/// Default terminal width.
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Default terminal height.
pub const DEFAULT_TERMINAL_HEIGHT: u16 = 24;

/// What the converter writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// A single asciicast v1 JSON document.
    #[default]
    Asciicast,
    /// Payload bytes concatenated with no framing.
    Raw,
}

impl FromStr for OutputFormat {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asciicast" | "json" => Ok(Self::Asciicast),
            "raw" => Ok(Self::Raw),
            other => Err(CastError::config(format!("unknown output format '{other}'"))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asciicast => f.write_str("asciicast"),
            Self::Raw => f.write_str("raw"),
        }
    }
}

/// Configuration for a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastConfig {
    /// Terminal width written to the header.
    pub width: u16,

    /// Terminal height written to the header.
    pub height: u16,

    /// Command written to the header; empty when unset.
    pub command: Option<String>,

    /// Title written to the header; empty when unset.
    pub title: Option<String>,

    /// Treat a trailing partial header as a truncated record.
    pub strict: bool,

    /// Indent the JSON document.
    pub pretty: bool,

    /// Output format.
    pub format: OutputFormat,
}

impl Default for CastConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_TERMINAL_WIDTH,
            height: DEFAULT_TERMINAL_HEIGHT,
            command: None,
            title: None,
            strict: false,
            pretty: false,
            format: OutputFormat::default(),
        }
    }
}

impl CastConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the terminal dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the command.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set strict header handling.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set pretty printing.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the output format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Overlay values from a parsed config file.
    #[must_use]
    pub fn merge_file(mut self, file: FileConfig) -> Self {
        if let Some(width) = file.width {
            self.width = width;
        }
        if let Some(height) = file.height {
            self.height = height;
        }
        if file.command.is_some() {
            self.command = file.command;
        }
        if file.title.is_some() {
            self.title = file.title;
        }
        if let Some(strict) = file.strict {
            self.strict = strict;
        }
        if let Some(pretty) = file.pretty {
            self.pretty = pretty;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        self
    }

    /// Overlay values from `TTYCAST_*` environment variables.
    pub fn merge_env(mut self, env: &EnvConfig) -> Result<Self> {
        if let Some(width) = env.parse_checked::<u16>(vars::WIDTH)? {
            self.width = width;
        }
        if let Some(height) = env.parse_checked::<u16>(vars::HEIGHT)? {
            self.height = height;
        }
        if let Some(command) = env.get(vars::COMMAND) {
            self.command = Some(command);
        }
        if let Some(title) = env.get(vars::TITLE) {
            self.title = Some(title);
        }
        if let Some(strict) = env.bool_checked(vars::STRICT)? {
            self.strict = strict;
        }
        if let Some(pretty) = env.bool_checked(vars::PRETTY)? {
            self.pretty = pretty;
        }
        if let Some(format) = env.parse_checked::<OutputFormat>(vars::FORMAT)? {
            self.format = format;
        }
        Ok(self)
    }

    /// Check that the configuration can produce a usable document.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(CastError::config("width must be non-zero"));
        }
        if self.height == 0 {
            return Err(CastError::config("height must be non-zero"));
        }
        Ok(())
    }
}
