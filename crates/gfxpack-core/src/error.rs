//! Error types for release lookup, download and extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `UpdateError`.
pub type Result<T> = std::result::Result<T, UpdateError>;

/// Errors that can occur while updating graphic packs.
///
/// Every variant is fatal to a run; nothing is retried.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// HTTP request failed (connect, timeout or body read).
    #[error("request to {url} failed: {source}")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// Response body could not be read to the end.
    #[error("reading response body from {url} failed: {source}")]
    BodyRead {
        /// Requested URL.
        url: String,
        /// Underlying read error.
        #[source]
        source: std::io::Error,
    },

    /// Server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    HttpStatus {
        /// Requested URL.
        url: String,
        /// Status code returned by the server.
        status: u16,
    },

    /// Release asset could not be located on the index page.
    #[error("release asset not found: {reason}")]
    NotFound {
        /// What was searched for.
        reason: String,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive is corrupted or not a ZIP container.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Archive entry resolves outside the destination directory.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The offending entry path as stored in the archive.
        path: PathBuf,
    },
}

impl UpdateError {
    /// Returns `true` if this error came from the network layer.
    ///
    /// # Examples
    ///
    /// ```
    /// use gfxpack_core::UpdateError;
    ///
    /// let err = UpdateError::HttpStatus {
    ///     url: "https://example.com".to_string(),
    ///     status: 404,
    /// };
    /// assert!(err.is_network());
    /// ```
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::BodyRead { .. } | Self::HttpStatus { .. }
        )
    }

    /// Returns `true` if this error represents a security violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use gfxpack_core::UpdateError;
    /// use std::path::PathBuf;
    ///
    /// let err = UpdateError::PathTraversal {
    ///     path: PathBuf::from("../etc/passwd"),
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// let err = UpdateError::InvalidArchive("truncated".to_string());
    /// assert!(!err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }
}

impl From<zip::result::ZipError> for UpdateError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io_err) => Self::Io(io_err),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}
