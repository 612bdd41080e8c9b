//! Validated destination directory type.

use crate::Result;
use crate::UpdateError;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// A validated destination root for archive extraction.
///
/// The path is normalized lexically (`.` removed, `a/..` collapsed) but is
/// not required to exist yet: extraction creates it on the first write.
///
/// # Security Properties
///
/// Every extracted entry is resolved against this root by
/// [`SafePath::resolve`](super::SafePath::resolve), which rejects any entry
/// that would land outside of it.
///
/// # Examples
///
/// ```
/// use gfxpack_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("graphicPacks/./")?;
/// assert_eq!(dest.as_path(), std::path::Path::new("graphicPacks"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Creates a new `DestDir` after validating the path.
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::Io` if:
    /// - The path is empty
    /// - The path exists but is not a directory
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(UpdateError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "destination directory path is empty",
            )));
        }

        if path.exists() && !path.is_dir() {
            return Err(UpdateError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("path is not a directory: {}", path.display()),
            )));
        }

        Ok(Self(normalize(path)))
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins an already validated relative path to this directory.
    #[inline]
    #[must_use]
    pub fn join_path(&self, path: &Path) -> PathBuf {
        self.0.join(path)
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

/// Lexically normalizes a path without touching the filesystem.
///
/// Leading `..` components of a relative path are kept since there is nothing
/// to collapse them into. An input that collapses to nothing becomes `.`.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
