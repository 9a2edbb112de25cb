//! sv Core - digest and self-integrity primitives for the sv command
//!
//! This crate provides the pieces the CLI guards itself with:
//! - BLAKE3 hashing of byte slices and files
//! - Sidecar checksum compare-or-initialize logic

pub mod hash;
pub mod integrity;

// Re-export main types for convenience
pub use hash::Blake3Hash;
pub use integrity::{sidecar_path, verify, Verification};

/// Common result type used throughout sv-core
pub type Result<T> = anyhow::Result<T>;
