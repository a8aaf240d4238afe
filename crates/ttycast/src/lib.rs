//! ttycast: ttyrec to asciicast conversion
//!
//! This crate reads binary ttyrec terminal recordings and turns them into
//! asciicast v1 JSON documents that terminal players understand.
//!
//! # Pipeline
//!
//! - [`ttyrec::RecordReader`] decodes `(timestamp, payload)` records
//! - [`timing::TimingAccumulator`] turns absolute timestamps into delays
//! - [`escape`] makes every payload byte safe inside a JSON string
//! - [`cast::CastEmitter`] collects frames and [`cast::write_cast`] writes
//!   the document
//!
//! # Example
//!
//! ```
//! use ttycast::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let recording = [
//!     10, 0, 0, 0, 0x20, 0xa1, 0x07, 0, 2, 0, 0, 0, b'$', b' ',
//!     11, 0, 0, 0, 0x20, 0xa1, 0x07, 0, 3, 0, 0, 0, b'l', b's', b'\n',
//! ];
//! let mut json = Vec::new();
//! let summary = convert_to(&recording[..], &mut json, &CastConfig::default())?;
//! assert_eq!(summary.frames, 2);
//! assert_eq!(summary.duration, 1.0);
//! # Ok(())
//! # }
//! ```

pub mod cast;
pub mod config;
pub mod error;
pub mod escape;
pub mod input;
pub mod prelude;
pub mod raw;
pub mod timing;
pub mod ttyrec;

pub use cast::{
    Cast, CastEmitter, CastHeader, ConvertSummary, Frame, convert, convert_to, write_cast,
};
pub use config::{CastConfig, EnvConfig, FileConfig, OutputFormat};
pub use error::{CastError, Result};
pub use escape::{escape, escape_bytes};
pub use input::open_recording;
pub use raw::write_raw;
pub use timing::{TimingAccumulator, delay_between};
pub use ttyrec::{Record, RecordReader, Timestamp};

// Test utilities
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

#[cfg(any(test, feature = "test-utils"))]
pub use test_utils::RecordingBuilder;
