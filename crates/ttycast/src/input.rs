//! Opening recordings from disk.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::error::{CastError, Result};

/// Open a recording for buffered reading.
///
/// A missing file is reported as [`CastError::InputNotFound`]; any other
/// failure to open it as [`CastError::InputUnreadable`].
pub fn open_recording(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CastError::open(path, e))?;
    if file.metadata().is_ok_and(|m| m.is_dir()) {
        return Err(CastError::InputUnreadable {
            path: path.to_path_buf(),
            source: std::io::Error::other("is a directory"),
        });
    }
    debug!(path = %path.display(), "opened recording");
    Ok(BufReader::new(file))
}
