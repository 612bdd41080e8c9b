//! Update run orchestration.
//!
//! One run walks `Idle → Locating → CheckingLocal → Downloading → Extracting
//! → Done`. A run stops early in `Done` when the archive is already on disk,
//! and lands in `Failed` on the first error.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::info;

use crate::DownloadReport;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::UpdaterConfig;
use crate::api::extract_archive_with_progress;
use crate::fetch::Fetcher;
use crate::locate::ReleaseLocator;

/// State of an update run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateState {
    /// Nothing has happened yet.
    Idle,
    /// Fetching the release page and locating the asset.
    Locating,
    /// Checking for the archive in the download directory.
    CheckingLocal,
    /// Streaming the archive to disk.
    Downloading,
    /// Extracting the archive.
    Extracting,
    /// Finished, either updated or already up to date.
    Done,
    /// Stopped by an error.
    Failed,
}

impl UpdateState {
    /// Returns `true` for `Done` and `Failed`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

impl fmt::Display for UpdateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Locating => "locating",
            Self::CheckingLocal => "checking-local",
            Self::Downloading => "downloading",
            Self::Extracting => "extracting",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    /// The newest archive was already present; nothing was fetched.
    UpToDate {
        /// File name of the archive.
        file_name: String,
        /// Local path checked.
        archive: PathBuf,
    },
    /// The archive was downloaded and extracted.
    Updated {
        /// Download details.
        download: DownloadReport,
        /// Extraction details.
        extraction: ExtractionReport,
        /// Destination root the packs were written to.
        output_dir: PathBuf,
    },
}

impl UpdateOutcome {
    /// Returns `true` if the run skipped download and extraction.
    #[must_use]
    pub const fn is_up_to_date(&self) -> bool {
        matches!(self, Self::UpToDate { .. })
    }
}

/// Sequences locate, local check, download and extraction.
///
/// # Examples
///
/// ```no_run
/// use gfxpack_core::{NoopProgress, Updater, UpdaterConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut updater = Updater::new(UpdaterConfig::default())?;
/// let outcome = updater.run(&mut NoopProgress)?;
/// if outcome.is_up_to_date() {
///     println!("already up to date");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Updater {
    config: UpdaterConfig,
    fetcher: Fetcher,
    locator: ReleaseLocator,
    state: UpdateState,
}

impl Updater {
    /// Creates an updater in the `Idle` state.
    pub fn new(config: UpdaterConfig) -> Result<Self> {
        let fetcher = Fetcher::new(&config.fetch)?;
        Ok(Self {
            config,
            fetcher,
            locator: ReleaseLocator::new(),
            state: UpdateState::Idle,
        })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> UpdateState {
        self.state
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// Performs one run.
    ///
    /// On error the state becomes `Failed` and the error is returned as is.
    pub fn run(&mut self, progress: &mut dyn ProgressCallback) -> Result<UpdateOutcome> {
        match self.run_steps(progress) {
            Ok(outcome) => {
                self.transition(UpdateState::Done, progress);
                Ok(outcome)
            }
            Err(err) => {
                debug!(state = %self.state, error = %err, "update failed");
                self.transition(UpdateState::Failed, progress);
                Err(err)
            }
        }
    }

    fn run_steps(&mut self, progress: &mut dyn ProgressCallback) -> Result<UpdateOutcome> {
        self.transition(UpdateState::Locating, progress);
        let page = self.fetcher.fetch_text(&self.config.index_url())?;
        let asset = self.locator.locate(&page)?;
        info!(asset = asset.relative_path(), "located release asset");

        self.transition(UpdateState::CheckingLocal, progress);
        let archive = self.config.download_dir.join(asset.file_name());
        if archive_present(&archive)? {
            info!(archive = %archive.display(), "already up to date");
            return Ok(UpdateOutcome::UpToDate {
                file_name: asset.file_name().to_string(),
                archive,
            });
        }

        self.transition(UpdateState::Downloading, progress);
        let url = asset.download_url(&self.config.release_url);
        let download = self
            .fetcher
            .download(&url, &self.config.download_dir, progress)?;

        self.transition(UpdateState::Extracting, progress);
        let extraction = extract_archive_with_progress(
            &download.path,
            &self.config.output_dir,
            &self.config.selection,
            progress,
        )?;

        Ok(UpdateOutcome::Updated {
            download,
            extraction,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn transition(&mut self, next: UpdateState, progress: &mut dyn ProgressCallback) {
        self.state = next;
        progress.on_state_change(next);
    }
}

/// Presence check by name only; the content is not inspected.
fn archive_present(path: &Path) -> Result<bool> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
