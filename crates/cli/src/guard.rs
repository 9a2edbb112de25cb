//! Integrity guard wiring for the running binary
//!
//! Resolves the current executable, runs the sidecar checksum check from
//! sv-core, and halts the process on a mismatch before any git subprocess
//! is spawned.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use sv_core::integrity::{self, Verification};

/// Run the self-integrity check, exiting with code 1 on a mismatch.
///
/// On the first run the computed digest is persisted and announced. A clean
/// re-check proceeds silently.
pub fn check() -> Result<()> {
    let program = std::env::current_exe()
        .context("Failed to resolve the running executable path")?;
    let sidecar = integrity::sidecar_path(&program);

    match integrity::verify(&program, &sidecar)? {
        Verification::Initialized(digest) => {
            println!(
                "{} Initial checksum stored: {}",
                "✓".green(),
                digest.to_hex().dimmed()
            );
            Ok(())
        }
        Verification::Verified(_) => {
            tracing::debug!("Integrity check passed");
            Ok(())
        }
        Verification::Mismatch { expected, actual } => {
            eprintln!("{} Integrity check failed!", "✗".red());
            eprintln!("  Expected: {}", expected);
            eprintln!("  Actual:   {}", actual);
            eprintln!("  Exiting.");
            std::process::exit(1);
        }
    }
}
