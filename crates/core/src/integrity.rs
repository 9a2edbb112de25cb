//! Self-integrity guard: sidecar checksum compare-or-initialize
//!
//! The running program hashes its own bytes. The first run persists the
//! digest to a sidecar file next to the executable; every later run
//! recomputes and compares. A mismatch means the binary or the sidecar was
//! modified and execution must halt.

use crate::hash;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the sidecar file holding the persisted checksum.
///
/// Tool-specific so that multiple guarded binaries can share a bin directory.
pub const SIDECAR_FILE_NAME: &str = ".sv-checksum";

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// No sidecar existed; the current digest was persisted
    Initialized(hash::Blake3Hash),
    /// Stored checksum matched the current digest
    Verified(hash::Blake3Hash),
    /// Stored checksum differs from the current digest
    Mismatch {
        /// Sidecar content as stored (trimmed, may not even be valid hex)
        expected: String,
        /// Hex digest of the program as it is now
        actual: String,
    },
}

/// Sidecar path for a program: `.sv-checksum` in the program's directory
pub fn sidecar_path(program: &Path) -> PathBuf {
    match program.parent() {
        Some(dir) => dir.join(SIDECAR_FILE_NAME),
        None => PathBuf::from(SIDECAR_FILE_NAME),
    }
}

/// Run the guard check for `program` against `sidecar`.
///
/// First call (no sidecar file) computes the program's digest, persists it,
/// and returns [`Verification::Initialized`]. Every later call recomputes
/// and compares; the sidecar is never rewritten after creation. I/O failures
/// (unreadable program or sidecar) surface as errors, not mismatches.
pub fn verify(program: &Path, sidecar: &Path) -> Result<Verification> {
    let actual = hash::hash_file(program)
        .with_context(|| format!("Failed to hash program at {}", program.display()))?;

    if !sidecar.exists() {
        fs::write(sidecar, actual.to_hex())
            .with_context(|| format!("Failed to write checksum to {}", sidecar.display()))?;
        return Ok(Verification::Initialized(actual));
    }

    let expected = fs::read_to_string(sidecar)
        .with_context(|| format!("Failed to read checksum from {}", sidecar.display()))?
        .trim()
        .to_string();

    if expected == actual.to_hex() {
        Ok(Verification::Verified(actual))
    } else {
        Ok(Verification::Mismatch {
            expected,
            actual: actual.to_hex(),
        })
    }
}
