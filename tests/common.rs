#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwl() -> Command {
    cargo_bin_cmd!("rworklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add one entry through the CLI
pub fn add(db_path: &str, date: &str, unit: &str, ticket: &str, task: &str) {
    let mut cmd = rwl();
    cmd.args(["--db", db_path, "add", task, "--date", date, "--unit", unit]);
    if !ticket.is_empty() {
        cmd.args(["--ticket", ticket]);
    }
    cmd.assert().success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    rwl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add(db_path, "2024-06-01", "ODL", "T9", "Switch getauscht");
    add(db_path, "2024-06-01", "Allgemein", "", "Teammeeting");
    add(db_path, "2024-06-01", "FVM", "T1", "Fix printer");
    add(db_path, "2024-06-01", "ODL", "", "Beamer geprüft");
    add(db_path, "2024-06-03", "GRG", "T2", "Laptop eingerichtet");
}
