//! End-to-end CLI tests against the built binary.
//!
//! Each test points the data and config directories at its own temp dirs so
//! nothing touches real user state.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary command with isolated data/config directories.
fn tealtimer(dirs: &(TempDir, TempDir)) -> Command {
    let mut cmd = Command::cargo_bin("tealtimer").unwrap();
    cmd.env("TEALTIMER_DATA_DIR", dirs.0.path())
        .env("TEALTIMER_CONFIG_DIR", dirs.1.path());
    cmd
}

fn temp_dirs() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

#[test]
fn help_describes_the_tool() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("countdown timers"));
}

#[test]
fn version_prints_package_version() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn add_then_list_plain_shows_the_timer() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .args(["add", "Launch Day", "--date", "2030-06-15T12:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created timer: Launch Day"));

    tealtimer(&dirs)
        .args(["list", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Launch Day"))
        .stdout(predicate::str::contains("digital"));
}

#[test]
fn add_rejects_invalid_dates() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .args(["add", "Broken", "--date", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid target date"));
}

#[test]
fn add_rejects_invalid_colors() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .args([
            "add",
            "Tinted",
            "--date",
            "2030-06-15T12:30",
            "--color",
            "turquoise",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color"));
}

#[test]
fn show_once_prints_remaining_summary() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .args([
            "add",
            "Party",
            "--date",
            "2030-12-31T23:59",
            "--theme",
            "calendar",
        ])
        .assert()
        .success();

    tealtimer(&dirs)
        .args(["show", "party", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Party:"))
        .stdout(predicate::str::contains("d "));
}

#[test]
fn show_unknown_timer_fails() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .args(["show", "ghost", "--once"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no timer named"));
}

#[test]
fn expired_timer_shows_completed() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .args(["add", "Past", "--date", "2000-01-01T00:00"])
        .assert()
        .success();

    tealtimer(&dirs)
        .args(["show", "Past", "--once"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed"));
}

#[test]
fn delete_without_confirmation_keeps_the_timer() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .args(["add", "Sticky", "--date", "2030-06-15T12:30"])
        .assert()
        .success();

    // Non-interactive stdin means the prompt declines
    tealtimer(&dirs)
        .args(["delete", "Sticky"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted"));

    tealtimer(&dirs)
        .args(["list", "--plain"])
        .assert()
        .stdout(predicate::str::contains("Sticky"));
}

#[test]
fn delete_with_yes_removes_the_timer() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .args(["add", "Doomed", "--date", "2030-06-15T12:30"])
        .assert()
        .success();

    tealtimer(&dirs)
        .args(["delete", "doomed", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: Doomed"));

    tealtimer(&dirs)
        .args(["list", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No timers"));
}

#[test]
fn export_writes_snapshot_file() {
    let dirs = temp_dirs();
    let out = TempDir::new().unwrap();
    tealtimer(&dirs)
        .args([
            "add",
            "Snap Shot",
            "--date",
            "2030-06-15T12:30",
            "--theme",
            "chronometer",
        ])
        .assert()
        .success();

    tealtimer(&dirs)
        .args(["export", "snap shot", "--output"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Snap-Shot-timer.txt"));

    let exported = out.path().join("Snap-Shot-timer.txt");
    let content = std::fs::read_to_string(exported).unwrap();
    assert!(content.contains("Snap Shot"));
}

#[test]
fn config_show_prints_defaults() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark_mode = true"))
        .stdout(predicate::str::contains("default_theme"));
}

#[test]
fn config_migrate_yes_creates_the_file() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config updated successfully"));

    let config_file = dirs.1.path().join("config.toml");
    let content = std::fs::read_to_string(config_file).unwrap();
    assert!(content.contains("dark_mode"));
}

#[test]
fn completions_emit_shell_script() {
    let dirs = temp_dirs();
    tealtimer(&dirs)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tealtimer"));
}
