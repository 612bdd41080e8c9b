//! Operation reporting and progress callbacks.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::updater::UpdateState;

/// Report of an archive extraction operation.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Target paths of processed entries, in archive order.
    pub paths: Vec<PathBuf>,

    /// Number of files written.
    pub files_extracted: usize,

    /// Number of directory entries created.
    pub directories_created: usize,

    /// Number of entries left out by the selection filter.
    pub entries_skipped: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction operation.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of items written.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }
}

/// Report of a completed download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    /// URL the archive was fetched from.
    pub url: String,

    /// File name derived from the URL's final path segment.
    pub file_name: String,

    /// Local path the archive was written to.
    pub path: PathBuf,

    /// Number of body bytes written.
    pub bytes_written: u64,
}

/// Callback trait for progress reporting during an update run.
///
/// # Examples
///
/// ```
/// use gfxpack_core::ProgressCallback;
/// use gfxpack_core::UpdateState;
/// use std::path::Path;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_state_change(&mut self, state: UpdateState) {
///         println!("state: {state}");
///     }
///
///     fn on_download_start(&mut self, url: &str, _total: Option<u64>) {
///         println!("downloading {url}");
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, path: &Path) {
///         println!("extracted {}", path.display());
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called when the update run enters a new state.
    fn on_state_change(&mut self, state: UpdateState);

    /// Called before the archive body is streamed.
    ///
    /// # Arguments
    ///
    /// * `url` - Asset URL being downloaded
    /// * `total` - Content length, when the server sent one
    fn on_download_start(&mut self, url: &str, total: Option<u64>);

    /// Called when bytes are written, both while downloading and extracting.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when an archive entry has been written.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called when the current phase is finished.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_state_change(&mut self, _state: UpdateState) {}

    fn on_download_start(&mut self, _url: &str, _total: Option<u64>) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
