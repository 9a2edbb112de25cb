//! Git subprocess helpers
//!
//! Every operation shells out to the real `git` binary and captures its
//! output. Unexpected failures surface the child's stderr verbatim; the
//! only interpreted outcome is "nothing to commit", which callers treat as
//! a benign no-op.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Environment variable git honors to skip TLS certificate verification
pub const GIT_SSL_NO_VERIFY: &str = "GIT_SSL_NO_VERIFY";

/// Outcome of a commit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was created; carries git's own summary line(s)
    Committed { summary: String },
    /// The index had nothing staged
    NothingToCommit,
}

/// Check whether `dir` is inside a git working tree
pub fn is_work_tree(dir: &Path) -> Result<bool> {
    let output = Command::new("git")
        .current_dir(dir)
        .arg("rev-parse")
        .arg("--is-inside-work-tree")
        .output()
        .context("Failed to execute git rev-parse. Is git installed?")?;

    Ok(output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true")
}

/// Name of the branch HEAD currently points at
pub fn current_branch(dir: &Path) -> Result<String> {
    let output = Command::new("git")
        .current_dir(dir)
        .arg("rev-parse")
        .arg("--abbrev-ref")
        .arg("HEAD")
        .output()
        .context("Failed to execute git rev-parse command")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("Could not determine current branch: {}", stderr);
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Stage all modified and untracked files
pub fn stage_all(dir: &Path) -> Result<()> {
    let output = Command::new("git")
        .current_dir(dir)
        .arg("add")
        .arg(".")
        .output()
        .context("Failed to execute git add command")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("Git add failed: {}", stderr);
    }

    Ok(())
}

/// Commit staged changes with the given message.
///
/// Git reports an empty index as a failed commit; that case is surfaced as
/// [`CommitOutcome::NothingToCommit`] instead of an error. Any other failure
/// carries the captured stderr.
pub fn commit(dir: &Path, message: &str) -> Result<CommitOutcome> {
    let output = Command::new("git")
        .current_dir(dir)
        .arg("commit")
        .arg("-m")
        .arg(message)
        .output()
        .context("Failed to execute git commit command")?;

    if output.status.success() {
        let summary = String::from_utf8_lossy(&output.stdout).trim().to_string();
        return Ok(CommitOutcome::Committed { summary });
    }

    // Depending on version, git prints this on stdout or stderr
    let stdout = String::from_utf8_lossy(&output.stdout).to_lowercase();
    let stderr = String::from_utf8_lossy(&output.stderr).to_lowercase();
    if stdout.contains("nothing to commit") || stderr.contains("nothing to commit") {
        return Ok(CommitOutcome::NothingToCommit);
    }

    anyhow::bail!(
        "Git commit failed:\n{}",
        String::from_utf8_lossy(&output.stderr).trim()
    );
}

/// Push `branch` to `remote`, setting upstream tracking.
///
/// When `ssl_no_verify` is set, `GIT_SSL_NO_VERIFY=true` is placed in the
/// child environment for this invocation only. Returns the raw output so
/// the caller can propagate git's own exit code on failure.
pub fn push_upstream(dir: &Path, remote: &str, branch: &str, ssl_no_verify: bool) -> Result<Output> {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir)
        .arg("push")
        .arg("-u")
        .arg(remote)
        .arg(branch);

    if ssl_no_verify {
        cmd.env(GIT_SSL_NO_VERIFY, "true");
    }

    cmd.output().context("Failed to execute git push command")
}
