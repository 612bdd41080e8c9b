//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use gfxpack_core::UpdateOutcome;
use serde::Serialize;
use std::io::Write;
use std::io::{self};

pub struct JsonFormatter;

/// Payload of a finished run.
#[derive(Debug, Serialize)]
struct UpdateOutput {
    /// `up_to_date` or `updated`.
    result: &'static str,
    file_name: String,
    archive_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<String>,
    bytes_downloaded: u64,
    files_extracted: usize,
    directories_created: usize,
    entries_skipped: usize,
    /// Files plus directories written.
    items_written: usize,
    bytes_written: u64,
    duration_ms: u128,
}

impl UpdateOutput {
    fn from_outcome(outcome: &UpdateOutcome) -> Self {
        match outcome {
            UpdateOutcome::UpToDate { file_name, archive } => Self {
                result: "up_to_date",
                file_name: file_name.clone(),
                archive_path: archive.display().to_string(),
                output_dir: None,
                bytes_downloaded: 0,
                files_extracted: 0,
                directories_created: 0,
                entries_skipped: 0,
                items_written: 0,
                bytes_written: 0,
                duration_ms: 0,
            },
            UpdateOutcome::Updated {
                download,
                extraction,
                output_dir,
            } => Self {
                result: "updated",
                file_name: download.file_name.clone(),
                archive_path: download.path.display().to_string(),
                output_dir: Some(output_dir.display().to_string()),
                bytes_downloaded: download.bytes_written,
                files_extracted: extraction.files_extracted,
                directories_created: extraction.directories_created,
                entries_skipped: extraction.entries_skipped,
                items_written: extraction.total_items(),
                bytes_written: extraction.bytes_written,
                duration_ms: extraction.duration.as_millis(),
            },
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_banner(&self) {}

    fn format_update_result(&self, outcome: &UpdateOutcome) -> Result<()> {
        let output = JsonOutput::success("update", UpdateOutput::from_outcome(outcome));
        Self::output(&output)
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("update", format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
