//! Shared fixtures for sv integration tests
//!
//! Repositories are created in temp directories with a throwaway identity,
//! remotes are local bare repositories, and the guard sidecar next to the
//! test binary is (re)seeded once per test process so a stale checksum from
//! an earlier build never trips the integrity check.

// Shared across test binaries; not every binary uses every helper
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Once;

/// Path of the binary under test
pub fn sv_binary() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_sv"))
}

static SEED_GUARD: Once = Once::new();

/// Write the current binary's digest to its sidecar, overwriting any stale
/// checksum left behind by a previous build.
pub fn seed_guard_sidecar() {
    SEED_GUARD.call_once(|| {
        let exe = sv_binary();
        let digest = sv_core::hash::hash_file(exe).expect("failed to hash sv binary");
        let sidecar = sv_core::integrity::sidecar_path(exe);
        std::fs::write(&sidecar, digest.to_hex()).expect("failed to seed guard sidecar");
    });
}

/// Run git in `dir`, asserting success, returning trimmed stdout
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("git must be installed for this test");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Run git in `dir` without asserting on the exit status
pub fn git_raw(dir: &Path, args: &[&str]) -> Output {
    Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("git must be installed for this test")
}

/// git init plus a throwaway identity so commits work anywhere
pub fn init_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);
}

/// Create a bare repository and register it as `origin` of `work`
pub fn add_bare_origin(work: &Path, bare: &Path) {
    let output = Command::new("git")
        .args(["init", "--bare"])
        .arg(bare)
        .output()
        .expect("git must be installed for this test");
    assert!(output.status.success());
    git(work, &["remote", "add", "origin", bare.to_str().unwrap()]);
}

/// Make an initial commit so the repository has a branch
pub fn seed_commit(work: &Path) {
    std::fs::write(work.join("README.md"), "# test\n").unwrap();
    git(work, &["add", "."]);
    git(work, &["commit", "-m", "seed"]);
}

/// Run sv in `dir` with config isolated under `home`
pub fn run_sv(dir: &Path, home: &Path, words: &[&str]) -> Output {
    run_sv_binary(sv_binary(), dir, home, words)
}

/// Run an arbitrary sv binary (used by guard tests driving a copied binary)
pub fn run_sv_binary(binary: &Path, dir: &Path, home: &Path, words: &[&str]) -> Output {
    let xdg: PathBuf = home.join(".config");
    Command::new(binary)
        .current_dir(dir)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", &xdg)
        .args(words)
        .output()
        .expect("failed to run sv")
}
