//! Command-line arguments and configuration resolution.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use ttycast::{CastConfig, EnvConfig, FileConfig, OutputFormat, Result};

/// Convert a ttyrec recording into an asciicast JSON document
#[derive(Parser, Debug)]
#[command(name = "ttycast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// ttyrec file to convert
    pub file: PathBuf,

    /// Terminal width written to the header
    #[arg(short, long)]
    pub width: Option<u16>,

    /// Terminal height written to the header
    #[arg(short = 'H', long)]
    pub height: Option<u16>,

    /// Command written to the header
    #[arg(long)]
    pub command: Option<String>,

    /// Title written to the header
    #[arg(long)]
    pub title: Option<String>,

    /// Fail on trailing bytes shorter than a record header
    #[arg(long)]
    pub strict: bool,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// asciicast v1 JSON document
    Asciicast,
    /// Payload bytes back to back
    Raw,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Asciicast => Self::Asciicast,
            Format::Raw => Self::Raw,
        }
    }
}

impl Cli {
    /// Layer defaults, config file, environment and flags, in that order.
    pub fn resolve_config(&self, env: &EnvConfig) -> Result<CastConfig> {
        let mut config = CastConfig::default();
        if let Some(path) = &self.config {
            config = config.merge_file(FileConfig::load(path)?);
        }
        config = config.merge_env(env)?;

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(command) = &self.command {
            config.command = Some(command.clone());
        }
        if let Some(title) = &self.title {
            config.title = Some(title.clone());
        }
        if self.strict {
            config.strict = true;
        }
        if self.pretty {
            config.pretty = true;
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }

        config.validate()?;
        Ok(config)
    }
}
