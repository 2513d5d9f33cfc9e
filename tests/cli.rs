//! Binary level tests: argument handling, startup validation and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tiered-fm").unwrap();
    cmd.current_dir(home.path()).env("HOME", home.path());
    cmd
}

#[test]
fn relative_start_directory_exits_with_one() {
    let home = TempDir::new().unwrap();

    command(&home)
        .args(["-m", "admin", "-d", "relative/dir"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid directory path."));
}

#[test]
fn start_directory_outside_root_exits_with_one() {
    let home = TempDir::new().unwrap();
    let root = home.path().join("root");
    fs::create_dir(&root).unwrap();
    let escape = format!("{}/../elsewhere", root.display());

    command(&home)
        .args(["-m", "basic", "-d", escape.as_str()])
        .arg("--root")
        .arg(&root)
        .assert()
        .code(1);
}

#[test]
fn unknown_mode_is_rejected_by_the_parser() {
    let home = TempDir::new().unwrap();

    command(&home)
        .args(["-m", "superuser"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("superuser"));
}

#[test]
fn session_lists_and_exits_cleanly() {
    let home = TempDir::new().unwrap();
    let work = home.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::write(work.join("a.txt"), b"0123456789").unwrap();

    command(&home)
        .args(["-m", "basic", "-d"])
        .arg(&work)
        .write_stdin("1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt - 10 bytes"))
        .stdout(predicate::str::contains("2. Copy item").not());

    // The log directory is prepared at startup even if nothing is logged.
    assert!(home.path().join("fm_log").is_dir());
}

#[test]
fn overrides_redirect_log_and_backups() {
    let home = TempDir::new().unwrap();
    let work = home.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::write(work.join("old.txt"), b"bye").unwrap();
    let log = home.path().join("custom/actions.log");
    let backups = home.path().join("custom/bak");

    command(&home)
        .args(["-m", "admin", "-d"])
        .arg(&work)
        .arg("--log-file")
        .arg(&log)
        .arg("--backup-dir")
        .arg(&backups)
        .write_stdin("4\nold.txt\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("old.txt was deleted and backed up."));

    assert_eq!(fs::read(backups.join("deleted_old.txt")).unwrap(), b"bye");
    assert!(fs::read_to_string(&log).unwrap().contains("Deleted"));
}
