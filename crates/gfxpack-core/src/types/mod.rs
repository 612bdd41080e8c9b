//! Type-safe wrappers for extraction.
//!
//! Destination roots and resolved entry paths are validated on construction
//! and cannot be created from raw paths without going through validation.

pub mod dest_dir;
pub mod entry_type;
pub mod safe_path;
pub mod selection;

pub use dest_dir::DestDir;
pub use entry_type::EntryType;
pub use safe_path::SafePath;
pub use selection::SelectionFilter;
