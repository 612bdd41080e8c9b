//! Progress reporting for an update run.

use crate::output::format_size;
use console::Term;
use gfxpack_core::ProgressCallback;
use gfxpack_core::UpdateState;
use gfxpack_core::locate::file_name_from_url;
use indicatif::ProgressBar;
use indicatif::ProgressState;
use indicatif::ProgressStyle;
use std::fmt::Write;
use std::path::Path;
use std::path::PathBuf;

/// CLI progress reporter implementing `ProgressCallback`.
///
/// Prints one line per phase and, when stdout is a TTY, a byte progress bar
/// while the archive downloads.
pub struct CliProgress {
    term: Term,
    show_bar: bool,
    verbose: bool,
    index_url: String,
    output_dir: PathBuf,
    state: UpdateState,
    download: Option<ProgressBar>,
    file_name: String,
    bytes_written: u64,
}

impl CliProgress {
    /// Creates a reporter for a run against `index_url` extracting into
    /// `output_dir`.
    #[must_use]
    pub fn new(index_url: String, output_dir: PathBuf, verbose: bool) -> Self {
        Self {
            term: Term::stdout(),
            show_bar: Self::should_show(),
            verbose,
            index_url,
            output_dir,
            state: UpdateState::Idle,
            download: None,
            file_name: String::new(),
            bytes_written: 0,
        }
    }

    /// Checks if we should show progress bars (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }

    fn line(&self, message: &str) {
        match &self.download {
            Some(bar) => bar.println(message),
            None => {
                let _ = self.term.write_line(message);
            }
        }
    }

    fn download_bar(total: Option<u64>) -> ProgressBar {
        let Some(total) = total else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {msg} {size}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner())
                    .with_key("size", |state: &ProgressState, w: &mut dyn Write| {
                        write!(w, "{}", format_size(state.pos())).unwrap_or(());
                    }),
            );
            return bar;
        };

        let bar = ProgressBar::new(total);
        // Template: "graphicPacks291.zip [████████░░░░] 15.2 MB/40.0 MB (5.1 MB/s, 5s)"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {size}/{total} ({bytes_per_sec}, {eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .with_key("size", |state: &ProgressState, w: &mut dyn Write| {
                    write!(w, "{}", format_size(state.pos())).unwrap_or(());
                })
                .with_key("total", |state: &ProgressState, w: &mut dyn Write| {
                    write!(w, "{}", format_size(state.len().unwrap_or(0))).unwrap_or(());
                })
                .with_key("bytes_per_sec", |state: &ProgressState, w: &mut dyn Write| {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let bytes_per_sec = state.per_sec() as u64;
                    write!(w, "{}/s", format_size(bytes_per_sec)).unwrap_or(());
                })
                .with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
                    write!(w, "{}s", state.eta().as_secs()).unwrap_or(());
                })
                .progress_chars("█▓░"),
        );
        bar
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        if let Some(bar) = self.download.take() {
            bar.finish_and_clear();
        }
    }
}

impl ProgressCallback for CliProgress {
    fn on_state_change(&mut self, state: UpdateState) {
        self.state = state;
        match state {
            UpdateState::Locating => self.line(&format!("loading {}", self.index_url)),
            UpdateState::Extracting => self.line(&format!(
                "extracting {} to {}",
                self.file_name,
                self.output_dir.display()
            )),
            _ => {}
        }
    }

    fn on_download_start(&mut self, url: &str, total: Option<u64>) {
        self.file_name = file_name_from_url(url).to_string();
        self.bytes_written = 0;
        self.line(&format!("downloading {url}"));

        if self.show_bar {
            let bar = Self::download_bar(total);
            bar.set_message(self.file_name.clone());
            self.download = Some(bar);
        }
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        if self.state != UpdateState::Downloading {
            return;
        }
        self.bytes_written += bytes;
        if let Some(bar) = &self.download {
            bar.set_position(self.bytes_written);
        }
    }

    fn on_entry_complete(&mut self, path: &Path) {
        if self.verbose {
            self.line(&format!("extracting {}", path.display()));
        }
    }

    fn on_complete(&mut self) {
        if self.state != UpdateState::Downloading {
            return;
        }
        if let Some(bar) = self.download.take() {
            bar.finish_and_clear();
        }
        self.line(&format!(
            "downloaded {} {}",
            self.file_name,
            format_size(self.bytes_written)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_progress() -> CliProgress {
        let mut progress = CliProgress::new(
            "http://127.0.0.1:1/releases/latest".to_string(),
            PathBuf::from("graphicPacks"),
            false,
        );
        progress.show_bar = false;
        progress
    }

    #[test]
    fn test_download_bytes_counted() {
        let mut progress = quiet_progress();

        progress.on_state_change(UpdateState::Downloading);
        progress.on_download_start("http://x/download/v1/graphicPacks1.zip", Some(2048));
        progress.on_bytes_written(1024);
        progress.on_bytes_written(1024);
        progress.on_complete();

        assert_eq!(progress.file_name, "graphicPacks1.zip");
        assert_eq!(progress.bytes_written, 2048);
        assert!(progress.download.is_none());
    }

    #[test]
    fn test_extraction_bytes_ignored() {
        let mut progress = quiet_progress();

        progress.on_state_change(UpdateState::Extracting);
        progress.on_bytes_written(4096);
        progress.on_entry_complete(Path::new("graphicPacks/Pack/rules.txt"));
        progress.on_complete();

        assert_eq!(progress.bytes_written, 0);
        assert_eq!(progress.state, UpdateState::Extracting);
    }
}
