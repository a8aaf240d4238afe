//! ttyrec binary recording support.
//!
//! A ttyrec file is a plain sequence of records. Each record is a 12-byte
//! little-endian header (seconds, microseconds, payload length) followed by
//! exactly `length` bytes of raw terminal output.

pub mod reader;
pub mod record;

pub use reader::{HEADER_LEN, RecordReader};
pub use record::{Record, Timestamp};
