//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use gfxpack_core::UpdateOutcome;

const RULE: &str = "---------------------------------------";

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn success_line(&self, message: &str) {
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }
}

/// Formats a byte count with a binary unit.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_banner(&self) {
        if self.quiet {
            return;
        }

        let title = if self.use_colors {
            style("Graphic Packs Updater").bold().to_string()
        } else {
            "Graphic Packs Updater".to_string()
        };
        let _ = self.term.write_line(RULE);
        let _ = self.term.write_line(&format!("\t{title}"));
        let _ = self.term.write_line(RULE);
    }

    fn format_update_result(&self, outcome: &UpdateOutcome) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        match outcome {
            UpdateOutcome::UpToDate { file_name, archive } => {
                self.success_line(&format!("your graphic-packs is up-to-date! {file_name}"));
                if self.verbose {
                    let _ = self
                        .term
                        .write_line(&format!("  Archive: {}", archive.display()));
                }
            }
            UpdateOutcome::Updated {
                download,
                extraction,
                output_dir,
            } => {
                self.success_line("update done!");
                let _ = self
                    .term
                    .write_line(&format!("  Items written: {}", extraction.total_items()));
                let _ = self.term.write_line(&format!(
                    "  Files extracted: {}",
                    extraction.files_extracted
                ));
                let _ = self
                    .term
                    .write_line(&format!("  Directories: {}", extraction.directories_created));
                let _ = self
                    .term
                    .write_line(&format!("  Skipped: {}", extraction.entries_skipped));
                let _ = self.term.write_line(&format!(
                    "  Total size: {}",
                    format_size(extraction.bytes_written)
                ));

                if self.verbose {
                    let _ = self
                        .term
                        .write_line(&format!("  Archive: {}", download.path.display()));
                    let _ = self
                        .term
                        .write_line(&format!("  Output: {}", output_dir.display()));
                    let _ = self
                        .term
                        .write_line(&format!("  Duration: {:?}", extraction.duration));
                }
            }
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.term.write_line(&format!("ERROR: {error:?}"));
        }
    }
}
