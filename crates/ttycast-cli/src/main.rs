//! ttycast - convert ttyrec recordings into asciicast JSON
//!
//! # Usage
//!
//! ```bash
//! # Write the asciicast document to stdout
//! ttycast session.ttyrec > session.cast
//!
//! # Override header metadata
//! ttycast --width 132 --height 43 --title "demo" session.ttyrec
//!
//! # Dump payloads straight to the terminal
//! ttycast --format raw session.ttyrec
//! ```
//!
//! Diagnostics and logs go to stderr; stdout carries only the converted
//! output. Set `RUST_LOG` or pass `-v` for more detail.

mod cli;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use ttycast::{CastError, EnvConfig, Result, convert_to, open_recording};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // help and version go to stderr too, keeping stdout for output
            eprint!("{}", err.render());
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(2),
            };
        }
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ttycast: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config(&EnvConfig::default())?;
    debug!(?config, file = %cli.file.display(), "resolved configuration");

    let input = open_recording(&cli.file)?;
    let stdout = io::stdout();
    let mut sink = BufWriter::new(stdout.lock());
    convert_to(input, &mut sink, &config)?;
    sink.flush().map_err(|e| CastError::io_context("flushing standard output", e))
}
