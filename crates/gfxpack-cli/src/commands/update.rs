//! Update command implementation.

use crate::cli::Cli;
use crate::error::add_update_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use gfxpack_core::NoopProgress;
use gfxpack_core::Updater;
use gfxpack_core::UpdaterConfig;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let config = UpdaterConfig::default()
        .with_release_url(cli.release_url.clone())
        .with_download_dir(cli.download_dir.clone())
        .with_output_dir(cli.output_dir.clone());

    let index_url = config.index_url();
    let output_dir = config.output_dir.clone();
    let mut updater = add_update_context(Updater::new(config))?;

    // Phase lines go to stdout, so JSON and quiet runs stay silent
    let outcome = if cli.json || cli.quiet {
        add_update_context(updater.run(&mut NoopProgress))?
    } else {
        let mut progress = CliProgress::new(index_url, output_dir, cli.verbose);
        add_update_context(updater.run(&mut progress))?
    };

    formatter.format_update_result(&outcome)?;

    Ok(())
}
