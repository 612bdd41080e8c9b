//! High-level public API for archive extraction.

use std::path::Path;

use crate::ExtractionReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::formats::ArchiveFormat;
use crate::formats::ZipArchive;
use crate::types::DestDir;
use crate::types::SelectionFilter;

/// Extracts a ZIP archive into `output_dir`.
///
/// Every entry is checked for containment before anything is written; the
/// first entry that would land outside `output_dir` aborts the extraction.
/// Entries written before that point stay on disk.
///
/// # Arguments
///
/// * `archive_path` - Path to the ZIP file
/// * `output_dir` - Destination root, created on demand
/// * `filter` - Names excluded from extraction
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be opened or is not a ZIP container
/// - An entry escapes the destination root
/// - I/O operations fail
///
/// # Examples
///
/// ```no_run
/// use gfxpack_core::extract_archive;
/// use gfxpack_core::types::SelectionFilter;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let filter = SelectionFilter::new(["BreathOfTheWild"]);
/// let report = extract_archive("graphicPacks.zip", "graphicPacks", &filter)?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
    filter: &SelectionFilter,
) -> Result<ExtractionReport> {
    extract_archive_with_progress(archive_path, output_dir, filter, &mut NoopProgress)
}

/// Extracts a ZIP archive with progress callbacks.
///
/// Same as [`extract_archive`], with `progress` notified after each entry
/// and once at the end.
///
/// # Errors
///
/// Same conditions as [`extract_archive`].
pub fn extract_archive_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
    filter: &SelectionFilter,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let dest = DestDir::new(output_dir)?;
    let mut archive = ZipArchive::open(archive_path)?;
    archive.extract(&dest, filter, progress)
}
