//! Record-to-frame conversion.

use std::io::{Read, Write};

use tracing::{debug, info, info_span};

use super::format::{Cast, CastHeader, Frame};
use super::writer::write_cast;
use crate::config::{CastConfig, OutputFormat};
use crate::error::Result;
use crate::raw::write_raw;
use crate::timing::TimingAccumulator;
use crate::ttyrec::{Record, RecordReader};

/// Where an emitter is in its record stream.
///
/// The terminal state is reached by [`CastEmitter::finish`], which consumes
/// the emitter and yields the finished [`Cast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterState {
    /// No record seen yet.
    Start,
    /// At least one frame has been produced.
    Reading,
}

/// Builds a [`Cast`] one record at a time.
///
/// Frames are kept in input order. Each frame's delay depends only on its
/// own timestamp and the previous record's.
#[derive(Debug)]
pub struct CastEmitter {
    header: CastHeader,
    timing: TimingAccumulator,
    frames: Vec<Frame>,
    state: EmitterState,
}

impl CastEmitter {
    /// Create an emitter writing the given header.
    #[must_use]
    pub const fn new(header: CastHeader) -> Self {
        Self {
            header,
            timing: TimingAccumulator::new(),
            frames: Vec::new(),
            state: EmitterState::Start,
        }
    }

    /// Create an emitter from a configuration.
    #[must_use]
    pub fn from_config(config: &CastConfig) -> Self {
        Self::new(CastHeader::from_config(config))
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> EmitterState {
        self.state
    }

    /// Frames produced so far.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Running total of delays.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.timing.total()
    }

    /// Convert one record into a frame, releasing its raw payload.
    pub fn push(&mut self, record: Record) -> &Frame {
        let delay = self.timing.advance(record.timestamp);
        self.frames.push(Frame::new(delay, &record.payload));
        self.state = EmitterState::Reading;
        &self.frames[self.frames.len() - 1]
    }

    /// Drain a reader until end of stream.
    ///
    /// A malformed record aborts the run; the frames gathered so far are
    /// dropped with the emitter.
    pub fn run<R: Read>(mut self, reader: &mut RecordReader<R>) -> Result<Cast> {
        while let Some(record) = reader.read_next()? {
            self.push(record);
        }
        Ok(self.finish())
    }

    /// Finish the document.
    #[must_use]
    pub fn finish(self) -> Cast {
        Cast {
            header: self.header,
            duration: self.timing.total(),
            frames: self.frames,
        }
    }
}

/// Outcome of a conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertSummary {
    /// Frames written.
    pub frames: usize,
    /// Sum of frame delays in seconds.
    pub duration: f64,
    /// Bytes of recording consumed.
    pub bytes_read: u64,
}

/// Read a whole recording into a [`Cast`].
///
/// # Example
///
/// ```
/// use ttycast::{CastConfig, convert};
///
/// let bytes = [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, b'$'];
/// let cast = convert(&bytes[..], &CastConfig::default()).unwrap();
/// assert_eq!(cast.frames.len(), 1);
/// assert_eq!(cast.frames[0].text, b"$");
/// ```
pub fn convert<R: Read>(input: R, config: &CastConfig) -> Result<Cast> {
    let mut reader = RecordReader::new(input).strict(config.strict);
    let cast = CastEmitter::from_config(config).run(&mut reader)?;
    debug!(
        records = reader.records_read(),
        bytes = reader.offset(),
        "recording decoded"
    );
    Ok(cast)
}

/// Convert a recording and write the result to `sink` in the configured format.
///
/// In asciicast mode the whole document is built before the first byte is
/// written, so a malformed recording leaves the sink untouched.
pub fn convert_to<R: Read, W: Write>(
    input: R,
    sink: &mut W,
    config: &CastConfig,
) -> Result<ConvertSummary> {
    config.validate()?;
    let _span = info_span!("convert", format = %config.format).entered();

    let summary = match config.format {
        OutputFormat::Asciicast => {
            let mut reader = RecordReader::new(input).strict(config.strict);
            let cast = CastEmitter::from_config(config).run(&mut reader)?;
            write_cast(sink, &cast, config.pretty)?;
            ConvertSummary {
                frames: cast.len(),
                duration: cast.duration,
                bytes_read: reader.offset(),
            }
        }
        OutputFormat::Raw => write_raw(input, sink, config.strict)?,
    };

    info!(
        frames = summary.frames,
        duration = summary.duration,
        bytes = summary.bytes_read,
        "conversion complete"
    );
    Ok(summary)
}
