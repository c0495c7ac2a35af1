#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slog() -> Command {
    cargo_bin_cmd!("shiftlogger")
}

/// Create a unique test log path inside the system temp dir and remove any existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftlogger.csv", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Create a unique test config path inside the system temp dir and remove any existing file
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftlogger.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a ready-made 3-column log file.
pub fn write_log(path: &str, rows: &[(&str, &str, &str)]) {
    let mut content = String::from("timestamp,action,department\n");
    for (ts, action, dept) in rows {
        content.push_str(&format!("{},{},{}\n", ts, action, dept));
    }
    fs::write(path, content).expect("write log");
}

/// Write a legacy 2-column log file (no department column).
pub fn write_legacy_log(path: &str, rows: &[(&str, &str)]) {
    let mut content = String::from("timestamp,action\n");
    for (ts, action) in rows {
        content.push_str(&format!("{},{}\n", ts, action));
    }
    fs::write(path, content).expect("write legacy log");
}
