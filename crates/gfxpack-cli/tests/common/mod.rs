//! Shared fixtures for CLI tests.
//!
//! Reuses the core crate's ZIP builder and canned HTTP server.

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

#[path = "../../../gfxpack-core/src/test_utils.rs"]
mod test_utils;

pub use test_utils::CannedResponse;
pub use test_utils::ZipTestBuilder;
pub use test_utils::serve;
