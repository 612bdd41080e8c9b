//! ZIP archive reader and extractor.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use super::common;
use super::traits::ArchiveEntry;
use super::traits::ArchiveFormat;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::types::DestDir;
use crate::types::EntryType;
use crate::types::SafePath;
use crate::types::SelectionFilter;

/// Mask applied to the recorded Unix mode before it is used.
const PERMISSION_MASK: u32 = 0o777;

/// ZIP archive handler.
///
/// # Examples
///
/// ```no_run
/// use gfxpack_core::NoopProgress;
/// use gfxpack_core::formats::{ArchiveFormat, ZipArchive};
/// use gfxpack_core::types::{DestDir, SelectionFilter};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut archive = ZipArchive::open("graphicPacks.zip")?;
/// let dest = DestDir::new("graphicPacks")?;
/// let report = archive.extract(&dest, &SelectionFilter::default(), &mut NoopProgress)?;
/// println!("{} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub struct ZipArchive<R: Read + Seek> {
    inner: zip::ZipArchive<R>,
}

impl ZipArchive<BufReader<File>> {
    /// Opens a ZIP file from disk.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be opened, `InvalidArchive` if it is
    /// not a readable ZIP container.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> ZipArchive<R> {
    /// Wraps a seekable reader holding a ZIP container.
    pub fn new(reader: R) -> Result<Self> {
        Ok(Self {
            inner: zip::ZipArchive::new(reader)?,
        })
    }

    /// Number of entries in the archive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the archive holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Visits every entry in the archive's native order.
    ///
    /// Stops at the first error returned by the archive or by `visit`.
    pub fn for_each_entry<F>(&mut self, mut visit: F) -> Result<()>
    where
        F: FnMut(ArchiveEntry<'_>) -> Result<()>,
    {
        for index in 0..self.inner.len() {
            let mut file = self.inner.by_index(index)?;
            let relative_path = file.name().to_owned();
            let entry_type = EntryType::from_is_dir(file.is_dir());
            let permission_bits = file
                .unix_mode()
                .map(|mode| mode & PERMISSION_MASK)
                .filter(|mode| *mode != 0);

            visit(ArchiveEntry {
                relative_path,
                entry_type,
                permission_bits,
                content: &mut file,
            })?;
        }
        Ok(())
    }
}

impl<R: Read + Seek> ArchiveFormat for ZipArchive<R> {
    fn extract(
        &mut self,
        dest: &DestDir,
        filter: &SelectionFilter,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport> {
        let start = Instant::now();
        debug!(
            format = self.format_name(),
            entries = self.len(),
            dest = %dest.as_path().display(),
            "extracting archive"
        );
        let mut report = ExtractionReport::new();
        let mut copy_buffer = CopyBuffer::new();

        self.for_each_entry(|entry| {
            // Containment is checked for every entry, selected or not.
            let safe = SafePath::resolve(Path::new(&entry.relative_path), dest)?;

            if !filter.should_extract(safe.as_path()) {
                debug!(entry = %entry.relative_path, "skipped by selection filter");
                report.entries_skipped += 1;
                return Ok(());
            }

            match entry.entry_type {
                EntryType::Directory => {
                    common::create_directory(safe.as_path())?;
                    report.directories_created += 1;
                }
                EntryType::File => {
                    let written = common::extract_file(
                        entry.content,
                        safe.as_path(),
                        entry.permission_bits,
                        &mut copy_buffer,
                        progress,
                    )?;
                    report.files_extracted += 1;
                    report.bytes_written += written;
                }
            }

            debug!(target_path = %safe.as_path().display(), "extracted");
            progress.on_entry_complete(safe.as_path());
            report.paths.push(safe.into_path_buf());
            Ok(())
        })?;

        report.duration = start.elapsed();
        progress.on_complete();
        Ok(report)
    }

    fn format_name(&self) -> &str {
        "zip"
    }
}
