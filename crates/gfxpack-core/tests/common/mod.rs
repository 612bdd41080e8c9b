//! Shared fixtures for integration tests.
//!
//! The ZIP builder and the canned HTTP server are the ones the unit tests use.

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

#[path = "../../src/test_utils.rs"]
mod test_utils;

pub use test_utils::CannedResponse;
pub use test_utils::ZipTestBuilder;
pub use test_utils::serve;

/// Release page body linking to `file_name` under version `version`.
pub fn release_page(version: &str, file_name: &str) -> Vec<u8> {
    format!(
        r#"<html><body>
<a href="/slashiee/cemu_graphic_packs/releases/download/{version}/{file_name}" rel="nofollow">{file_name}</a>
<a href="/slashiee/cemu_graphic_packs/archive/{version}.zip">Source code (zip)</a>
</body></html>"#
    )
    .into_bytes()
}
