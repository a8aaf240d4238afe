//! Record and timestamp definitions.

/// A record timestamp as stored in the file.
///
/// Both fields are taken verbatim from the header. `micros` is meant to be
/// below one million but the format does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timestamp {
    /// Seconds since an arbitrary epoch.
    pub secs: u32,
    /// Microseconds component.
    pub micros: u32,
}

impl Timestamp {
    /// Create a timestamp.
    #[must_use]
    pub const fn new(secs: u32, micros: u32) -> Self {
        Self { secs, micros }
    }
}

impl From<(u32, u32)> for Timestamp {
    fn from((secs, micros): (u32, u32)) -> Self {
        Self::new(secs, micros)
    }
}

/// One decoded ttyrec record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// When the payload was captured.
    pub timestamp: Timestamp,
    /// Raw terminal output, possibly empty.
    pub payload: Vec<u8>,
}

impl Record {
    /// Create a record.
    #[must_use]
    pub fn new(timestamp: Timestamp, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            timestamp,
            payload: payload.into(),
        }
    }

    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Check if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
