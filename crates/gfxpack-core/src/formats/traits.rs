//! Common traits for archive format handlers.

use std::io::Read;

use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::types::DestDir;
use crate::types::EntryType;
use crate::types::SelectionFilter;

/// One entry of an archive, handed out by a reader while it is open.
///
/// The content stream borrows the reader and is valid only for the duration
/// of the visit.
pub struct ArchiveEntry<'a> {
    /// Entry path as stored in the archive (not validated).
    pub relative_path: String,

    /// File or directory.
    pub entry_type: EntryType,

    /// Unix permission bits (`0o777` mask), when the archive recorded them.
    pub permission_bits: Option<u32>,

    /// Decompressed content stream.
    pub content: &'a mut dyn Read,
}

impl std::fmt::Debug for ArchiveEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveEntry")
            .field("relative_path", &self.relative_path)
            .field("entry_type", &self.entry_type)
            .field("permission_bits", &self.permission_bits)
            .finish_non_exhaustive()
    }
}

/// Trait for archive format handlers.
pub trait ArchiveFormat {
    /// Extracts the entries selected by `filter` below `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, an entry escapes `dest`, or a write
    /// fails. Extraction stops at the first error.
    fn extract(
        &mut self,
        dest: &DestDir,
        filter: &SelectionFilter,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport>;

    /// Returns the archive format name.
    fn format_name(&self) -> &str;
}
