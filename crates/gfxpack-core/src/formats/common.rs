//! Filesystem writes shared by format handlers.
//!
//! - [`create_directory`]: directory creation (idempotent)
//! - [`extract_file`]: buffered file write with permission preservation

use std::fs::File;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::path::Path;

use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_progress;

/// Creates a directory and its missing ancestors.
///
/// Uses the platform default permissions. Succeeds if the directory already
/// exists.
pub fn create_directory(path: &Path) -> Result<()> {
    create_dir_all(path)?;
    Ok(())
}

/// Writes `reader` to `target`, creating parent directories as needed.
///
/// An existing file is truncated. When `mode` is set it is applied after the
/// content is flushed (Unix only); other platforms ignore it.
///
/// Returns the number of bytes written.
pub fn extract_file<R: Read + ?Sized>(
    reader: &mut R,
    target: &Path,
    mode: Option<u32>,
    copy_buffer: &mut CopyBuffer,
    progress: &mut dyn ProgressCallback,
) -> Result<u64> {
    if let Some(parent) = target.parent() {
        create_dir_all(parent)?;
    }

    let output_file = File::create(target)?;
    let mut buffered_writer = BufWriter::with_capacity(64 * 1024, output_file);
    let bytes_written = copy_with_progress(reader, &mut buffered_writer, copy_buffer, progress)?;
    buffered_writer.flush()?;
    drop(buffered_writer);

    #[cfg(unix)]
    if let Some(mode) = mode {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(target, std::fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(bytes_written)
}
