use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{setup_test_log, slog, temp_out, write_log};

#[test]
fn test_backup_copies_the_log() {
    let log_path = setup_test_log("backup_copy");
    let dest = temp_out("backup_copy", "csv");
    write_log(&log_path, &[("2025-08-25T09:00:00", "IN", "Default")]);

    slog()
        .args(["--log", &log_path, "--test", "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert_eq!(
        fs::read_to_string(&log_path).expect("read log"),
        fs::read_to_string(&dest).expect("read backup")
    );
}

#[test]
fn test_backup_with_compression_leaves_only_the_zip() {
    let log_path = setup_test_log("backup_zip");
    let dest = temp_out("backup_zip", "csv");
    write_log(&log_path, &[("2025-08-25T09:00:00", "IN", "Default")]);

    slog()
        .args([
            "--log", &log_path, "--test", "backup", "--file", &dest, "--compress",
        ])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    let zip_path = Path::new(&dest).with_extension("zip");
    assert!(zip_path.exists());
    assert!(!Path::new(&dest).exists());

    fs::remove_file(&zip_path).ok();
}

#[test]
fn test_backup_rejects_a_directory_destination() {
    let log_path = setup_test_log("backup_bad_dest");
    write_log(&log_path, &[("2025-08-25T09:00:00", "IN", "Default")]);

    // ".." is a directory, so the copy fails with an error instead of panicking
    slog()
        .args(["--log", &log_path, "--test", "backup", "--file", "..", "--compress"])
        .assert()
        .failure()
        .stderr(contains("Error"));
}

#[test]
fn test_backup_fails_when_the_log_is_missing() {
    let log_path = setup_test_log("backup_missing");
    let dest = temp_out("backup_missing", "csv");

    slog()
        .args(["--log", &log_path, "--test", "backup", "--file", &dest])
        .assert()
        .failure()
        .stderr(contains("Event log not found"));
}
