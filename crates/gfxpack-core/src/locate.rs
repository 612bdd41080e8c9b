//! Release asset lookup on the release index page.
//!
//! The page is treated as plain text: the first substring shaped like
//! `/download/<version>/graphicPacks<anything>.zip` names the newest archive.

use std::sync::LazyLock;

use regex::Regex;

use crate::Result;
use crate::UpdateError;

/// Shape of the asset path. `.` does not cross line breaks, and the lazy
/// quantifiers keep a match inside the first link on a line.
#[allow(clippy::expect_used)]
static ASSET_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/download/.*?/graphicPacks.*?\.zip").expect("asset path pattern is valid")
});

/// Relative path of a release archive, as found on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    relative_path: String,
}

impl ReleaseAsset {
    /// Wraps a relative asset path.
    pub fn new(relative_path: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
        }
    }

    /// The path fragment, e.g. `/download/Github291/graphicPacks291.zip`.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Final path segment, used as the local file name.
    ///
    /// # Examples
    ///
    /// ```
    /// use gfxpack_core::ReleaseAsset;
    ///
    /// let asset = ReleaseAsset::new("/download/Github291/graphicPacks291.zip");
    /// assert_eq!(asset.file_name(), "graphicPacks291.zip");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &str {
        file_name_from_url(&self.relative_path)
    }

    /// Download URL: the release page URL followed by the relative path.
    ///
    /// # Examples
    ///
    /// ```
    /// use gfxpack_core::ReleaseAsset;
    ///
    /// let asset = ReleaseAsset::new("/download/v1/graphicPacks1.zip");
    /// assert_eq!(
    ///     asset.download_url("https://example.com/releases/"),
    ///     "https://example.com/releases/download/v1/graphicPacks1.zip"
    /// );
    /// ```
    #[must_use]
    pub fn download_url(&self, release_url: &str) -> String {
        format!("{}{}", release_url.trim_end_matches('/'), self.relative_path)
    }
}

/// Returns the last `/`-separated segment of a URL or path, ignoring any
/// query string or fragment.
#[must_use]
pub fn file_name_from_url(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().unwrap_or(path)
}

/// Finds the newest release asset on an index page.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReleaseLocator;

impl ReleaseLocator {
    /// Creates a locator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the first asset path found in `page`.
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::NotFound` if the page holds no matching path.
    ///
    /// # Examples
    ///
    /// ```
    /// use gfxpack_core::ReleaseLocator;
    ///
    /// let page = r#"<a href="/owner/repo/releases/download/Github291/graphicPacks291.zip">"#;
    /// let asset = ReleaseLocator::new().locate(page).unwrap();
    /// assert_eq!(asset.relative_path(), "/download/Github291/graphicPacks291.zip");
    ///
    /// assert!(ReleaseLocator::new().locate("<html></html>").is_err());
    /// ```
    pub fn locate(&self, page: &str) -> Result<ReleaseAsset> {
        ASSET_PATH
            .find(page)
            .map(|found| ReleaseAsset::new(found.as_str()))
            .ok_or_else(|| UpdateError::NotFound {
                reason: "no /download/<version>/graphicPacks*.zip link on the release page"
                    .to_string(),
            })
    }
}
