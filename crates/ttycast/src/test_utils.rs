//! Test utilities for ttycast.
//!
//! [`RecordingBuilder`] assembles ttyrec byte streams by hand, including
//! damaged ones, so reader and converter behaviour can be checked without
//! fixture files.

use crate::ttyrec::Timestamp;

/// Builds a ttyrec byte stream record by record.
///
/// # Example
///
/// ```
/// use ttycast::RecordingBuilder;
///
/// let bytes = RecordingBuilder::new()
///     .record((1, 0), b"hello")
///     .record((2, 0), b"")
///     .build();
/// assert_eq!(bytes.len(), 12 + 5 + 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingBuilder {
    bytes: Vec<u8>,
    records: usize,
}

impl RecordingBuilder {
    /// Start an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a well-formed record stamped `(secs, micros)`.
    #[must_use]
    pub fn record(self, timestamp: (u32, u32), payload: &[u8]) -> Self {
        let len = u32::try_from(payload.len()).expect("payload longer than u32::MAX");
        self.truncated_record(timestamp, len, payload)
    }

    /// Append a header declaring `declared_len` bytes followed by `payload`.
    ///
    /// When `payload` is shorter than `declared_len` the stream is damaged.
    #[must_use]
    pub fn truncated_record(
        mut self,
        (secs, micros): (u32, u32),
        declared_len: u32,
        payload: &[u8],
    ) -> Self {
        let timestamp = Timestamp::new(secs, micros);
        self.bytes.extend_from_slice(&timestamp.secs.to_le_bytes());
        self.bytes.extend_from_slice(&timestamp.micros.to_le_bytes());
        self.bytes.extend_from_slice(&declared_len.to_le_bytes());
        self.bytes.extend_from_slice(payload);
        self.records += 1;
        self
    }

    /// Append arbitrary bytes.
    #[must_use]
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Number of headers written so far.
    #[must_use]
    pub const fn record_count(&self) -> usize {
        self.records
    }

    /// Finish and return the bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
