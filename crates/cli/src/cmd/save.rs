//! Save command - stage, commit, and push the working tree
//!
//! The flow mirrors what a developer types by hand: confirm we are in a
//! repository, resolve the branch, `git add .`, commit, push with upstream
//! tracking. "Nothing to commit" stops the flow as a benign no-op; a failed
//! push exits with git's own status code.

use crate::git::{self, CommitOutcome};
use crate::system_config;
use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub fn run(message_words: &[String]) -> Result<()> {
    let config = system_config::load()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;

    if !git::is_work_tree(&current_dir)? {
        anyhow::bail!("This directory is not a Git repository.");
    }

    // The directory name is only a fallback guess; HEAD wins
    let guessed = util::branch_from_dir(&current_dir);
    let branch = git::current_branch(&current_dir)?;
    if branch != guessed {
        println!(
            "{} Warning: current branch is '{}', but folder name is '{}'.",
            "!".yellow(),
            branch,
            guessed
        );
    }

    let message = util::resolve_message(message_words);

    println!("{} Staging changes...", "→".cyan());
    git::stage_all(&current_dir)?;

    println!("{} Committing with message: '{}'", "→".cyan(), message);
    match git::commit(&current_dir, &message)? {
        CommitOutcome::Committed { summary } => {
            if !summary.is_empty() {
                println!("{}", summary);
            }
        }
        CommitOutcome::NothingToCommit => {
            println!("Nothing to commit.");
            return Ok(());
        }
    }

    println!(
        "{} Pushing to remote branch '{}'...",
        "→".cyan(),
        branch
    );
    if config.push.ssl_no_verify {
        println!(
            "{} TLS certificate verification is disabled for this push (push.ssl_no_verify).",
            "!".yellow()
        );
    }

    let output = git::push_upstream(&current_dir, &config.push.remote, &branch, config.push.ssl_no_verify)?;
    if !output.status.success() {
        eprint!("{}", String::from_utf8_lossy(&output.stderr));
        std::process::exit(output.status.code().unwrap_or(1));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        println!("{}", stdout.trim());
    }
    println!("{} Push complete.", "✓".green());

    Ok(())
}
