//! Buffered stream copy with progress reporting.
//!
//! Used both for streaming HTTP bodies to disk and for writing decompressed
//! archive entries. A failed read is reported apart from a failed write so
//! the caller can tell a dropped connection from a full disk.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::ProgressCallback;
use crate::UpdateError;

/// Buffer size for I/O operations (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable fixed-size copy buffer.
#[derive(Debug)]
pub struct CopyBuffer {
    #[allow(clippy::large_stack_arrays)]
    buf: [u8; COPY_BUFFER_SIZE],
}

impl CopyBuffer {
    /// Creates a new zero-initialized copy buffer.
    #[inline]
    #[must_use]
    #[allow(clippy::large_stack_arrays)]
    pub fn new() -> Self {
        Self {
            buf: [0u8; COPY_BUFFER_SIZE],
        }
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Side of a copy that failed.
#[derive(Debug)]
pub enum CopyError {
    /// Reading from the source failed.
    Read(io::Error),
    /// Writing to the destination failed.
    Write(io::Error),
}

impl From<CopyError> for UpdateError {
    fn from(err: CopyError) -> Self {
        match err {
            CopyError::Read(e) | CopyError::Write(e) => Self::Io(e),
        }
    }
}

/// Copies `reader` into `writer` through `buffer`, reporting every chunk to
/// `progress`.
///
/// Returns the total number of bytes copied.
///
/// # Errors
///
/// Returns [`CopyError::Read`] or [`CopyError::Write`] for the failing side.
/// Interrupted reads are retried.
///
/// # Examples
///
/// ```
/// use gfxpack_core::NoopProgress;
/// use gfxpack_core::copy::{CopyBuffer, copy_with_progress};
///
/// let mut buffer = CopyBuffer::new();
/// let mut input: &[u8] = b"rules";
/// let mut output = Vec::new();
///
/// let copied = copy_with_progress(&mut input, &mut output, &mut buffer, &mut NoopProgress)
///     .map_err(gfxpack_core::UpdateError::from)?;
/// assert_eq!(copied, 5);
/// # Ok::<(), gfxpack_core::UpdateError>(())
/// ```
pub fn copy_with_progress<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
    progress: &mut dyn ProgressCallback,
) -> Result<u64, CopyError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };

        writer
            .write_all(&buffer.buf[..bytes_read])
            .map_err(CopyError::Write)?;

        total += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }

    Ok(total)
}
