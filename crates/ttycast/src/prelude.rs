//! Convenient re-exports for common ttycast usage.
//!
//! ```
//! use ttycast::prelude::*;
//!
//! let cast = convert(&b""[..], &CastConfig::default()).unwrap();
//! assert!(cast.is_empty());
//! ```

// Conversion
pub use crate::cast::{
    Cast, CastEmitter, CastHeader, ConvertSummary, Frame, convert, convert_to, write_cast,
};

// Configuration
pub use crate::config::{CastConfig, OutputFormat};

// Error handling
pub use crate::error::{CastError, Result};

// Decoding
pub use crate::ttyrec::{Record, RecordReader, Timestamp};
