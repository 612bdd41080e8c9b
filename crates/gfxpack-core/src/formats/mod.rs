//! Archive format implementations.

pub(crate) mod common;
pub mod traits;
pub mod zip;

pub use traits::ArchiveEntry;
pub use traits::ArchiveFormat;
pub use zip::ZipArchive;
