//! Block Reader and writer
//!
//! File I/O around a [`ConfigBackend`]. Reading is a single `fs::read`, so
//! the file handle is closed before decoding starts.

use crate::backend::ConfigBackend;
use crate::error::{ReadError, WriteError};
use std::fs;
use std::path::Path;

/// Read a block file and decode it into a configuration handle
///
/// # Errors
/// - `ReadError::Io` if the file cannot be read
/// - `ReadError::Decode` if the contents are not a configuration block
pub fn read_block<B: ConfigBackend>(backend: &B, path: &Path) -> Result<B::Handle, ReadError> {
    let bytes = fs::read(path).map_err(|e| ReadError::io_error(path, e))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read block file");

    backend
        .decode(&bytes)
        .map_err(|source| ReadError::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Encode a configuration handle and write it to `path`, replacing any
/// existing file
///
/// # Errors
/// - `WriteError::Encode` if the backend cannot encode the handle
/// - `WriteError::Io` if the file cannot be written
pub fn write_block<B: ConfigBackend>(
    backend: &B,
    handle: &B::Handle,
    path: &Path,
) -> Result<(), WriteError> {
    let bytes = backend.encode(handle).map_err(WriteError::Encode)?;
    fs::write(path, &bytes).map_err(|e| WriteError::io_error(path, e))?;
    tracing::info!(path = %path.display(), len = bytes.len(), "wrote block file");
    Ok(())
}
