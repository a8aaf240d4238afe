//! Raw payload dump.
//!
//! Writes every payload back to back with no framing or escaping. Piping
//! the result into a terminal shows the final screen of the session.
//! Unlike asciicast output this streams: records already written stay
//! written if a later record turns out to be truncated.

use std::io::{Read, Write};

use crate::cast::ConvertSummary;
use crate::error::{CastError, Result};
use crate::timing::TimingAccumulator;
use crate::ttyrec::RecordReader;

/// Stream every payload in `input` to `sink`.
pub fn write_raw<R: Read, W: Write>(
    input: R,
    sink: &mut W,
    strict: bool,
) -> Result<ConvertSummary> {
    let mut reader = RecordReader::new(input).strict(strict);
    let mut timing = TimingAccumulator::new();
    let mut frames = 0;

    while let Some(record) = reader.read_next()? {
        timing.advance(record.timestamp);
        sink
            .write_all(&record.payload)
            .map_err(|e| CastError::io_context("writing raw payload", e))?;
        frames += 1;
    }
    sink
        .flush()
        .map_err(|e| CastError::io_context("flushing raw output", e))?;

    Ok(ConvertSummary {
        frames,
        duration: timing.total(),
        bytes_read: reader.offset(),
    })
}
