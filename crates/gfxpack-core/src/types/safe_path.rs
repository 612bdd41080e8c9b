//! Validated extraction target path.

use crate::Result;
use crate::UpdateError;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use super::DestDir;
use super::dest_dir::normalize;

/// An archive entry path resolved inside a destination root.
///
/// # Security Properties
///
/// - Can ONLY be constructed through [`SafePath::resolve`]
/// - NO `From<PathBuf>` implementation
/// - The target is always a strict descendant of the destination root
///
/// # Examples
///
/// ```
/// use gfxpack_core::types::DestDir;
/// use gfxpack_core::types::SafePath;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("graphicPacks")?;
///
/// let safe = SafePath::resolve(Path::new("Pack/./rules.txt"), &dest)?;
/// assert_eq!(safe.as_path(), Path::new("graphicPacks/Pack/rules.txt"));
///
/// // Escaping the root is rejected
/// assert!(SafePath::resolve(Path::new("../../etc/passwd"), &dest).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath {
    relative: PathBuf,
    target: PathBuf,
}

impl SafePath {
    /// Resolves an entry path against `dest`.
    ///
    /// `dest` joined with the entry is normalized lexically and must land
    /// strictly below `dest`. Intermediate components may leave the root as
    /// long as the result comes back: under `graphicPacks`, the entry
    /// `foo/../../graphicPacks/x` resolves to `graphicPacks/x`.
    ///
    /// # Errors
    ///
    /// Returns `UpdateError::PathTraversal` carrying the original entry path
    /// if it:
    /// - is absolute or carries a drive prefix
    /// - normalizes to a path outside the destination root
    /// - resolves to the destination root itself
    pub fn resolve(entry_path: &Path, dest: &DestDir) -> Result<Self> {
        let traversal = || UpdateError::PathTraversal {
            path: entry_path.to_path_buf(),
        };

        if entry_path
            .components()
            .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
        {
            return Err(traversal());
        }

        let joined = normalize(&dest.join_path(entry_path));
        let relative = if dest.as_path() == Path::new(".") {
            joined
        } else {
            joined
                .strip_prefix(dest.as_path())
                .map_err(|_| traversal())?
                .to_path_buf()
        };

        let escapes = relative
            .components()
            .next()
            .is_none_or(|first| !matches!(first, Component::Normal(_)));
        if escapes {
            return Err(traversal());
        }

        let target = dest.join_path(&relative);
        debug_assert!(target.starts_with(dest.as_path()));

        Ok(Self { relative, target })
    }

    /// Returns the full target path (`dest` joined with the entry).
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.target
    }

    /// Returns the normalized entry path relative to the destination root.
    #[inline]
    #[must_use]
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Converts into the full target `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.target
    }
}
