//! JSON string escaping for raw terminal bytes.
//!
//! Every byte value maps to a fragment that is safe inside a JSON string
//! body. Control bytes become short or `\u00XX` escapes; bytes at or above
//! 0x80 pass through untouched, so no UTF-8 validation or re-encoding
//! happens here.

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Escaped form of a single byte, at most six bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    buf: [u8; 6],
    len: u8,
}

impl Fragment {
    const fn plain(byte: u8) -> Self {
        Self {
            buf: [byte, 0, 0, 0, 0, 0],
            len: 1,
        }
    }

    const fn short(letter: u8) -> Self {
        Self {
            buf: [b'\\', letter, 0, 0, 0, 0],
            len: 2,
        }
    }

    const fn unicode(byte: u8) -> Self {
        Self {
            buf: [
                b'\\',
                b'u',
                b'0',
                b'0',
                HEX_DIGITS[(byte >> 4) as usize],
                HEX_DIGITS[(byte & 0x0f) as usize],
            ],
            len: 6,
        }
    }

    /// The escaped bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl AsRef<[u8]> for Fragment {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<&str> for Fragment {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Escape one byte.
///
/// # Example
///
/// ```
/// use ttycast::escape::escape;
///
/// assert_eq!(escape(b'\n'), "\\n");
/// assert_eq!(escape(0x1b), "\\u001b");
/// assert_eq!(escape(b'A'), "A");
/// ```
#[must_use]
pub const fn escape(byte: u8) -> Fragment {
    match byte {
        0x08 => Fragment::short(b'b'),
        0x0c => Fragment::short(b'f'),
        b'\n' => Fragment::short(b'n'),
        b'\r' => Fragment::short(b'r'),
        b'\t' => Fragment::short(b't'),
        b'\\' => Fragment::short(b'\\'),
        b'"' => Fragment::short(b'"'),
        b if b.is_ascii_control() => Fragment::unicode(b),
        b => Fragment::plain(b),
    }
}

/// Append the escaped form of `bytes` to `out`.
pub fn escape_into(bytes: &[u8], out: &mut Vec<u8>) {
    out.reserve(bytes.len());
    for &byte in bytes {
        out.extend_from_slice(escape(byte).as_bytes());
    }
}

/// Escape a whole payload into a new buffer.
///
/// An empty payload yields an empty buffer.
#[must_use]
pub fn escape_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    escape_into(bytes, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_escapes() {
        assert_eq!(escape(0x08), "\\b");
        assert_eq!(escape(0x0c), "\\f");
        assert_eq!(escape(0x0a), "\\n");
        assert_eq!(escape(0x0d), "\\r");
        assert_eq!(escape(0x09), "\\t");
        assert_eq!(escape(0x5c), "\\\\");
        assert_eq!(escape(0x22), "\\\"");
    }

    #[test]
    fn control_bytes_use_unicode_escapes() {
        assert_eq!(escape(0x00), "\\u0000");
        assert_eq!(escape(0x07), "\\u0007");
        assert_eq!(escape(0x0b), "\\u000b");
        assert_eq!(escape(0x1b), "\\u001b");
        assert_eq!(escape(0x1f), "\\u001f");
        assert_eq!(escape(0x7f), "\\u007f");
    }

    #[test]
    fn printable_bytes_pass_through() {
        assert_eq!(escape(b'A'), "A");
        assert_eq!(escape(b' '), " ");
        assert_eq!(escape(b'/'), "/");
        assert_eq!(escape(b'~'), "~");
    }

    #[test]
    fn high_bytes_pass_through() {
        for byte in 0x80..=0xff_u8 {
            assert_eq!(escape(byte).as_bytes(), [byte]);
        }
    }

    #[test]
    fn every_byte_has_a_fragment() {
        for byte in 0..=0xff_u8 {
            let fragment = escape(byte);
            assert!(!fragment.as_bytes().is_empty());
            assert!(fragment.as_bytes().iter().all(|b| *b >= 0x20 && *b != 0x7f));
        }
    }

    #[test]
    fn payload_with_ansi_sequence() {
        let escaped = escape_bytes(b"\x1b[1;32mok\x1b[0m\r\n");
        assert_eq!(escaped, b"\\u001b[1;32mok\\u001b[0m\\r\\n");
    }

    #[test]
    fn embedded_nul_is_not_a_terminator() {
        assert_eq!(escape_bytes(b"a\0b"), b"a\\u0000b");
    }

    #[test]
    fn empty_payload() {
        assert!(escape_bytes(b"").is_empty());
    }

    #[test]
    fn escape_into_appends() {
        let mut out = b"prefix:".to_vec();
        escape_into(b"\"q\"", &mut out);
        assert_eq!(out, b"prefix:\\\"q\\\"");
    }
}
