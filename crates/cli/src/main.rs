//! sv - checksum-guarded git save command

use anyhow::Result;
use clap::Parser;

mod cmd;
mod git;
mod guard;
mod system_config;
mod util;

/// Stage, commit, and push the working tree in one step
#[derive(Parser)]
#[command(name = "sv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Commit message words; joined with spaces. Defaults to the current
    /// timestamp when omitted.
    #[arg(trailing_var_arg = true)]
    message: Vec<String>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Guard before any git subprocess runs
    guard::check()?;

    cmd::save::run(&cli.message)
}
