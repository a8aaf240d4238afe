//! Sequential ttyrec record decoding.

use std::io::{ErrorKind, Read};

use tracing::{debug, warn};

use super::record::{Record, Timestamp};
use crate::error::{CastError, Result};

/// Size of a record header in bytes.
pub const HEADER_LEN: usize = 12;

/// Largest single reservation made while reading a payload.
const PAYLOAD_CHUNK: u64 = 64 * 1024;

/// Reads ttyrec records one at a time from any byte source.
///
/// A clean end of input at a record boundary yields `Ok(None)`. A payload
/// shorter than its declared length is always a
/// [`CastError::TruncatedRecord`]. A header cut short is treated as end of
/// input unless the reader is [strict](Self::strict).
///
/// # Example
///
/// ```
/// use ttycast::ttyrec::RecordReader;
///
/// let bytes = [1, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, b'h', b'i'];
/// let mut reader = RecordReader::new(&bytes[..]);
/// let record = reader.read_next().unwrap().unwrap();
/// assert_eq!(record.payload, b"hi");
/// assert!(reader.read_next().unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct RecordReader<R> {
    inner: R,
    offset: u64,
    records: u64,
    strict: bool,
    failed: bool,
}

impl<R: Read> RecordReader<R> {
    /// Create a lenient reader.
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            offset: 0,
            records: 0,
            strict: false,
            failed: false,
        }
    }

    /// Reject trailing bytes shorter than a header instead of ignoring them.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Byte offset of the next unread record.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Number of records decoded so far.
    #[must_use]
    pub const fn records_read(&self) -> u64 {
        self.records
    }

    /// Decode the next record.
    ///
    /// On success the read position advances by `12 + length` bytes.
    pub fn read_next(&mut self) -> Result<Option<Record>> {
        let start = self.offset;
        let mut header = [0u8; HEADER_LEN];
        let got = read_full(&mut self.inner, &mut header)
            .map_err(|e| CastError::io_context("reading record header", e))?;

        if got < HEADER_LEN {
            if got == 0 {
                return Ok(None);
            }
            if self.strict {
                return Err(CastError::truncated(
                    start,
                    HEADER_LEN as u64,
                    got as u64,
                ));
            }
            warn!(
                offset = start,
                trailing = got,
                "ignoring trailing bytes shorter than a record header"
            );
            self.offset += got as u64;
            return Ok(None);
        }

        let (timestamp, len) = decode_header(&header);
        self.offset += HEADER_LEN as u64;
        let payload = self.read_payload(start, len)?;
        self.offset += u64::from(len);
        self.records += 1;

        debug!(offset = start, len, secs = timestamp.secs, "read record");
        Ok(Some(Record { timestamp, payload }))
    }

    /// Read exactly `len` payload bytes.
    ///
    /// Memory is reserved in chunks as bytes arrive, so a corrupt length
    /// surfaces as a truncated record rather than a huge allocation.
    fn read_payload(&mut self, start: u64, len: u32) -> Result<Vec<u8>> {
        let expected = u64::from(len);
        let mut payload = Vec::new();
        let mut got = 0u64;

        while got < expected {
            let want = (expected - got).min(PAYLOAD_CHUNK);
            payload
                .try_reserve_exact(want as usize)
                .map_err(|e| CastError::allocation(got + want, e))?;
            let n = self
                .inner
                .by_ref()
                .take(want)
                .read_to_end(&mut payload)
                .map_err(|e| CastError::io_context("reading record payload", e))?;
            if n == 0 {
                break;
            }
            got += n as u64;
        }

        if got < expected {
            return Err(CastError::truncated(start, expected, got));
        }
        Ok(payload)
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.read_next().transpose();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

/// Split a raw header into its timestamp and payload length.
fn decode_header(header: &[u8; HEADER_LEN]) -> (Timestamp, u32) {
    let secs = le_u32(header, 0);
    let micros = le_u32(header, 4);
    let len = le_u32(header, 8);
    (Timestamp::new(secs, micros), len)
}

const fn le_u32(bytes: &[u8; HEADER_LEN], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Fill `buf` as far as the source allows, returning how many bytes landed.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
