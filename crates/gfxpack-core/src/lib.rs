//! Updater library for Cemu community graphic packs.
//!
//! `gfxpack-core` finds the newest graphic packs archive on a release page,
//! downloads it unless a file of the same name is already present, and
//! extracts it with every entry confined to the destination root.
//!
//! # Examples
//!
//! ```no_run
//! use gfxpack_core::{NoopProgress, UpdateOutcome, Updater, UpdaterConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut updater = Updater::new(UpdaterConfig::default())?;
//! match updater.run(&mut NoopProgress)? {
//!     UpdateOutcome::UpToDate { file_name, .. } => println!("{file_name} is current"),
//!     UpdateOutcome::Updated { extraction, .. } => {
//!         println!("Extracted {} files", extraction.files_extracted);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod error;
pub mod fetch;
pub mod formats;
pub mod locate;
pub mod report;
pub mod types;
pub mod updater;

#[cfg(test)]
pub mod test_utils;

// Re-export main API types
pub use api::extract_archive;
pub use api::extract_archive_with_progress;
pub use config::FetchConfig;
pub use config::UpdaterConfig;
pub use error::Result;
pub use error::UpdateError;
pub use fetch::Fetcher;
pub use locate::ReleaseAsset;
pub use locate::ReleaseLocator;
pub use report::DownloadReport;
pub use report::ExtractionReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use updater::UpdateOutcome;
pub use updater::UpdateState;
pub use updater::Updater;

// Re-export types module for easier access
pub use types::DestDir;
pub use types::EntryType;
pub use types::SafePath;
pub use types::SelectionFilter;
