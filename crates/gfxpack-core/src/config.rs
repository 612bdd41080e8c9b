//! Configuration for an update run.

use std::path::PathBuf;
use std::time::Duration;

use crate::types::SelectionFilter;

/// Release page of the community graphic packs.
pub const DEFAULT_RELEASE_URL: &str = "https://github.com/slashiee/cemu_graphic_packs/releases";

/// Directory the packs are extracted into.
pub const DEFAULT_OUTPUT_DIR: &str = "graphicPacks";

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// `User-Agent` header sent with every request.
    pub user_agent: String,

    /// Whole-request timeout. `None` waits as long as the platform allows.
    pub timeout: Option<Duration>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("gfxpack/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

/// Settings for one update run.
///
/// # Examples
///
/// ```
/// use gfxpack_core::UpdaterConfig;
///
/// let config = UpdaterConfig::default()
///     .with_output_dir("packs")
///     .with_download_dir("downloads");
/// assert_eq!(config.index_url(), format!("{}/latest", config.release_url));
/// ```
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// Release page URL. The index is `<release_url>/latest` and asset paths
    /// are appended to it.
    pub release_url: String,

    /// Directory the archive is downloaded into and checked for.
    pub download_dir: PathBuf,

    /// Destination root for extraction.
    pub output_dir: PathBuf,

    /// Entry selection passed to the extractor.
    pub selection: SelectionFilter,

    /// HTTP client settings.
    pub fetch: FetchConfig,
}

impl Default for UpdaterConfig {
    /// Defaults:
    /// - `release_url`: [`DEFAULT_RELEASE_URL`]
    /// - `download_dir`: `.`
    /// - `output_dir`: [`DEFAULT_OUTPUT_DIR`]
    /// - `selection`: `BreathOfTheWild`, `MarioKart8`, `SuperMario3DWorld`
    fn default() -> Self {
        Self {
            release_url: DEFAULT_RELEASE_URL.to_string(),
            download_dir: PathBuf::from("."),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            selection: SelectionFilter::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl UpdaterConfig {
    /// URL of the page listing the newest release.
    #[must_use]
    pub fn index_url(&self) -> String {
        format!("{}/latest", self.release_url.trim_end_matches('/'))
    }

    /// Sets the release page URL.
    #[must_use]
    pub fn with_release_url(mut self, url: impl Into<String>) -> Self {
        self.release_url = url.into();
        self
    }

    /// Sets the download directory.
    #[must_use]
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    /// Sets the extraction root.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the selection filter.
    #[must_use]
    pub fn with_selection(mut self, selection: SelectionFilter) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the HTTP client settings.
    #[must_use]
    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }
}
