//! Error types for ttycast.
//!
//! This module defines all error types used throughout the library.
//! Every failure aborts the whole conversion; nothing is downgraded to a
//! default value.

use std::collections::TryReserveError;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for ttycast operations.
#[derive(Debug, Error)]
pub enum CastError {
    /// The input recording does not exist.
    #[error("input not found: {}", path.display())]
    InputNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The input recording exists but could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    InputUnreadable {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record header or payload ended before its declared size.
    #[error(
        "truncated record at byte offset {offset}: expected {expected} bytes, found {available}"
    )]
    TruncatedRecord {
        /// Byte offset of the start of the damaged record.
        offset: u64,
        /// Bytes the record needed (header or payload).
        expected: u64,
        /// Bytes actually present before end of input.
        available: u64,
    },

    /// A payload buffer could not be allocated.
    #[error("failed to allocate {requested} bytes for record payload")]
    Allocation {
        /// Requested buffer size in bytes.
        requested: u64,
        /// The allocator's report.
        #[source]
        source: TryReserveError,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An I/O error occurred with additional context.
    #[error("{context}: {source}")]
    IoWithContext {
        /// What operation was being performed.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON value could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Result type alias for ttycast operations.
pub type Result<T> = std::result::Result<T, CastError>;

impl CastError {
    /// Classify a failure to open the input file.
    pub fn open(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::InputUnreadable { path, source }
        }
    }

    /// Create a truncated record error.
    #[must_use]
    pub const fn truncated(offset: u64, expected: u64, available: u64) -> Self {
        Self::TruncatedRecord {
            offset,
            expected,
            available,
        }
    }

    /// Create an allocation failure error.
    #[must_use]
    pub const fn allocation(requested: u64, source: TryReserveError) -> Self {
        Self::Allocation { requested, source }
    }

    /// Create an I/O error with context.
    pub fn io_context(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoWithContext {
            context: context.into(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error means the recording itself is damaged.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::TruncatedRecord { .. })
    }

    /// Check if this error is about locating or opening the input.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InputNotFound { .. } | Self::InputUnreadable { .. })
    }
}
