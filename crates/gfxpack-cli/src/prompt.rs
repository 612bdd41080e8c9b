//! Final acknowledgment step.

use console::Term;
use std::io;
use std::io::IsTerminal;
use tracing::warn;

const PROMPT: &str = "Press 'Enter' to finish...";

/// Waits for Enter unless disabled or stdin is not interactive.
pub fn acknowledge(no_wait: bool) -> io::Result<()> {
    if !should_wait(no_wait, io::stdin().is_terminal()) {
        return Ok(());
    }

    let term = Term::stdout();
    term.write_str(PROMPT)?;
    term.flush()?;
    term.read_line()?;
    Ok(())
}

/// Runs [`acknowledge`], logging a failure instead of returning it.
pub fn finish(no_wait: bool) {
    if let Err(err) = acknowledge(no_wait) {
        warn!(error = %err, "could not read the acknowledgment");
    }
}

fn should_wait(no_wait: bool, interactive: bool) -> bool {
    !no_wait && interactive
}
