#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Civil zone used by every CLI test (Honolulu, no DST).
pub const OFFSET: &str = "--utc-offset=-10:00";

pub fn heliops() -> Command {
    cargo_bin_cmd!("heliops")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_heliops.sqlite", name));
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

/// Initialize DB and schedule a small August 2025 dataset:
/// - flight #1 on 2025-08-01 09:00-11:30, completed
/// - flight #2 on 2025-08-15 23:30-00:15, scheduled (lands after midnight)
/// - maintenance #1 on 2025-08-31 08:00
pub fn init_db_with_data(db_path: &str) {
    heliops()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    heliops()
        .args([
            "--db",
            db_path,
            OFFSET,
            "add",
            "flight",
            "2025-08-01",
            "09:00",
            "--end",
            "11:30",
            "--aircraft",
            "N350HX",
            "--pilot",
            "Kai",
            "--title",
            "Island tour",
            "--status",
            "completed",
        ])
        .assert()
        .success();

    heliops()
        .args([
            "--db",
            db_path,
            OFFSET,
            "add",
            "flight",
            "2025-08-15",
            "23:30",
            "--end",
            "00:15",
            "--aircraft",
            "N407HX",
            "--title",
            "Night transfer",
        ])
        .assert()
        .success();

    heliops()
        .args([
            "--db",
            db_path,
            OFFSET,
            "add",
            "maintenance",
            "2025-08-31",
            "08:00",
            "--aircraft",
            "N350HX",
            "--title",
            "100h inspection",
        ])
        .assert()
        .success();
}
