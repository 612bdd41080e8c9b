//! Archive entry type enumeration.

/// Type of entry in an archive.
///
/// ZIP symlink entries are reported as [`EntryType::File`]; their content is
/// the link target and they are written out as regular files.
///
/// # Examples
///
/// ```
/// use gfxpack_core::types::EntryType;
///
/// assert_eq!(EntryType::from_is_dir(true), EntryType::Directory);
/// assert_eq!(EntryType::from_is_dir(false), EntryType::File);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// Regular file entry.
    File,

    /// Directory entry.
    Directory,
}

impl EntryType {
    /// Maps the directory flag of a container entry to an entry type.
    #[must_use]
    pub const fn from_is_dir(is_dir: bool) -> Self {
        if is_dir { Self::Directory } else { Self::File }
    }
}
