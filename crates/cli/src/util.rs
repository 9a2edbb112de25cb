//! Shared helpers for the save flow

use chrono::Local;
use std::path::Path;

/// strftime format for the default commit message
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Guess a branch name from a directory's base name.
///
/// Only a fallback guess; the actual current branch wins when they differ.
/// A path with no base name (e.g. `/`) yields an empty guess.
pub fn branch_from_dir(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Default commit message: the current local time as `YYYY-MM-DD HH:MM:SS`
pub fn timestamp_message() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Join CLI words into a commit message, or fall back to the timestamp
pub fn resolve_message(words: &[String]) -> String {
    if words.is_empty() {
        timestamp_message()
    } else {
        words.join(" ")
    }
}
