#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rag() -> Command {
    cargo_bin_cmd!("ragenda")
}

/// Create a unique test workspace path inside the system temp dir and remove
/// any leftovers from a previous run
pub fn setup_workspace(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ragenda", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a workspace and create a current agenda starting at `at`
pub fn init_with_agenda(dir: &str, at: &str) {
    rag()
        .args(["--dir", dir, "--test", "init"])
        .assert()
        .success();

    rag()
        .args(["--dir", dir, "--test", "new", "--at", at])
        .assert()
        .success();
}
