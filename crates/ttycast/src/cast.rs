//! Asciicast v1 document construction and output.
//!
//! [`CastEmitter`] turns decoded records into [`Frame`]s, and
//! [`write_cast`] serializes the finished [`Cast`] as one JSON document.

pub mod emitter;
pub mod format;
pub mod writer;

pub use emitter::{CastEmitter, ConvertSummary, EmitterState, convert, convert_to};
pub use format::{Cast, CastHeader, Frame};
pub use writer::write_cast;
