//! CLI argument parsing using clap.

use clap::Parser;
use gfxpack_core::config::DEFAULT_OUTPUT_DIR;
use gfxpack_core::config::DEFAULT_RELEASE_URL;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gfxpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Exit without waiting for Enter at the end
    #[arg(long)]
    pub no_wait: bool,

    /// Directory the graphic packs are extracted into
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Directory the release archive is downloaded into
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub download_dir: PathBuf,

    /// Release page to look up the newest archive on
    #[arg(long, value_name = "URL", default_value = DEFAULT_RELEASE_URL)]
    pub release_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}
