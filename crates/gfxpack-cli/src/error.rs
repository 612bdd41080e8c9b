//! Error conversion utilities for CLI.
//!
//! Converts gfxpack-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use gfxpack_core::UpdateError;

/// Converts `UpdateError` to user-friendly anyhow error with context
pub fn convert_update_error(err: UpdateError) -> anyhow::Error {
    match err {
        UpdateError::Network { url, source } => {
            anyhow!(
                "Could not load '{url}': {source}\n\
                 HINT: Check your internet connection and try again."
            )
        }
        UpdateError::BodyRead { url, source } => {
            anyhow!(
                "Could not read the response from '{url}': {source}\n\
                 HINT: The connection dropped mid-transfer. Run the updater again."
            )
        }
        UpdateError::HttpStatus { url, status } => {
            anyhow!(
                "Request to '{url}' returned HTTP {status}\n\
                 HINT: The release page may have moved. Use --release-url to point at it."
            )
        }
        UpdateError::NotFound { reason } => {
            anyhow!(
                "Could not find the graphic packs archive: {reason}\n\
                 HINT: The release page layout may have changed."
            )
        }
        UpdateError::PathTraversal { path } => {
            anyhow!(
                "Security violation: archive entry '{}' escapes the output directory\n\
                 HINT: This archive may be malicious. Delete it and do not extract it by hand.",
                path.display()
            )
        }
        UpdateError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive: {reason}\n\
                 HINT: The download may be corrupted. Delete the archive and run again."
            )
        }
        UpdateError::Io(io_err) => anyhow!("I/O error: {io_err}"),
    }
}

/// Adds context to a core result
pub fn add_update_context<T>(result: Result<T, UpdateError>) -> anyhow::Result<T> {
    result.map_err(convert_update_error)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_path_traversal_error() {
        let err = UpdateError::PathTraversal {
            path: PathBuf::from("../../etc/passwd"),
        };
        let msg = format!("{:?}", convert_update_error(err));
        assert!(msg.contains("Security violation"));
        assert!(msg.contains("../../etc/passwd"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_http_status_error() {
        let err = UpdateError::HttpStatus {
            url: "https://example.com/releases/latest".to_string(),
            status: 404,
        };
        let msg = format!("{:?}", convert_update_error(err));
        assert!(msg.contains("HTTP 404"));
        assert!(msg.contains("--release-url"));
    }

    #[test]
    fn test_convert_not_found_error() {
        let err = UpdateError::NotFound {
            reason: "no link".to_string(),
        };
        let msg = format!("{:?}", convert_update_error(err));
        assert!(msg.contains("no link"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_io_error() {
        let err = UpdateError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let msg = format!("{:?}", add_update_context::<()>(Err(err)).unwrap_err());
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("denied"));
    }
}
