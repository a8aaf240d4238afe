//! Cast document definitions.

use crate::config::{CAST_VERSION, CastConfig, DEFAULT_TERMINAL_HEIGHT, DEFAULT_TERMINAL_WIDTH};
use crate::escape::escape_bytes;

/// One output frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Seconds since the previous frame; may be negative.
    pub delay: f64,
    /// Escaped payload, ready to sit between JSON quotes.
    pub text: Vec<u8>,
}

impl Frame {
    /// Create a frame from a raw payload, escaping it.
    #[must_use]
    pub fn new(delay: f64, payload: &[u8]) -> Self {
        Self {
            delay,
            text: escape_bytes(payload),
        }
    }
}

/// Header fields of an asciicast v1 document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastHeader {
    /// Format version.
    pub version: u8,
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Command; ttyrec does not record it.
    pub command: String,
    /// Title; ttyrec does not record it.
    pub title: String,
}

impl Default for CastHeader {
    fn default() -> Self {
        Self {
            version: CAST_VERSION,
            width: DEFAULT_TERMINAL_WIDTH,
            height: DEFAULT_TERMINAL_HEIGHT,
            command: String::new(),
            title: String::new(),
        }
    }
}

impl CastHeader {
    /// Create a header with the given dimensions.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Build the header a configuration asks for.
    #[must_use]
    pub fn from_config(config: &CastConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            command: config.command.clone().unwrap_or_default(),
            title: config.title.clone().unwrap_or_default(),
            ..Default::default()
        }
    }
}

/// A complete asciicast v1 document.
#[derive(Debug, Clone, PartialEq)]
pub struct Cast {
    /// Header.
    pub header: CastHeader,
    /// Frames in recording order.
    pub frames: Vec<Frame>,
    /// Sum of every frame delay.
    pub duration: f64,
}

impl Cast {
    /// Create an empty document.
    #[must_use]
    pub const fn new(header: CastHeader) -> Self {
        Self {
            header,
            frames: Vec::new(),
            duration: 0.0,
        }
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if the document has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
