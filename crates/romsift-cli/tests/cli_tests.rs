//! Integration tests for the romsift CLI binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use romsift_test_utils::Library;
use std::fs;

/// Get a Command for the romsift binary
fn romsift_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("romsift"));
    cmd.env_remove("RUST_LOG")
        .env_remove("ROMSIFT_BASE_DIR")
        .env_remove("ROMSIFT_DESTINATION_DIR")
        .env_remove("ROMSIFT_CONFIG")
        .env("NO_COLOR", "1");
    cmd
}

fn library_with_gb() -> Library {
    let lib = Library::new();
    lib.add_entries("gb", &["Tetris (World).gb", "Tetris (Japan).gb"]);
    lib
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    romsift_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--console-name"))
        .stdout(predicate::str::contains("--destination-dir"));
}

#[test]
fn test_version_output() {
    romsift_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("romsift"));
}

#[test]
fn test_console_name_is_required() {
    romsift_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--console-name"));
}

// ============================================================================
// List Generation
// ============================================================================

#[test]
fn test_lists_only_without_destination() {
    let lib = library_with_gb();

    romsift_cmd()
        .arg("--base-dir")
        .arg(lib.base())
        .args(["--console-name", "gb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK gb"))
        .stderr(predicate::str::contains("not syncing"));

    assert_eq!(lib.read_list("gb", "whitelist.auto.txt"), vec!["Tetris (World).gb"]);
    assert_eq!(lib.read_list("gb", "blacklist.auto.txt"), vec!["Tetris (Japan).gb"]);
}

#[test]
fn test_base_dir_defaults_to_current_directory() {
    let lib = library_with_gb();

    romsift_cmd()
        .current_dir(lib.base())
        .args(["--console-name", "gb"])
        .assert()
        .success()
        .stderr(predicate::str::contains("using current directory"));

    assert_eq!(lib.read_list("gb", "whitelist.auto.txt"), vec!["Tetris (World).gb"]);
}

#[test]
fn test_rule_flags_are_applied() {
    let lib = Library::new();
    lib.add_entries("snes", &["NBA Jam (USA).sfc", "Super Metroid (USA).sfc"]);

    romsift_cmd()
        .arg("--base-dir")
        .arg(lib.base())
        .args(["--console-name", "snes", "--no-sports"])
        .assert()
        .success();

    assert_eq!(
        lib.read_list("snes", "blacklist.auto.txt"),
        vec!["NBA Jam (USA).sfc"]
    );
}

#[test]
fn test_rerelease_and_video_flags_are_applied() {
    let lib = Library::new();
    lib.add_entries(
        "gba",
        &[
            "GBA Video - Shrek (USA).gba",
            "Metroid Fusion (USA).gba",
            "Metroid Fusion (USA) (Virtual Console).gba",
        ],
    );

    romsift_cmd()
        .arg("--base-dir")
        .arg(lib.base())
        .args(["--console-name", "gba", "--no-rereleases", "--no-video"])
        .assert()
        .success();

    assert_eq!(
        lib.read_list("gba", "whitelist.auto.txt"),
        vec!["Metroid Fusion (USA).gba"]
    );
}

#[test]
fn test_config_file_enables_rules() {
    let lib = Library::new();
    lib.add_entries("snes", &["NBA Jam (USA).sfc", "Super Metroid (USA).sfc"]);
    let config = lib.base().join("romsift.toml");
    fs::write(&config, "[rules]\nsports = true\n").unwrap();

    romsift_cmd()
        .arg("--base-dir")
        .arg(lib.base())
        .arg("--config")
        .arg(&config)
        .args(["--console-name", "snes"])
        .assert()
        .success();

    assert_eq!(
        lib.read_list("snes", "whitelist.auto.txt"),
        vec!["Super Metroid (USA).sfc"]
    );
}

#[test]
fn test_invalid_config_file_fails() {
    let lib = library_with_gb();
    let config = lib.base().join("romsift.toml");
    fs::write(&config, "unknown_key = true\n").unwrap();

    romsift_cmd()
        .arg("--base-dir")
        .arg(lib.base())
        .arg("--config")
        .arg(&config)
        .args(["--console-name", "gb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

// ============================================================================
// Sync
// ============================================================================

#[test]
fn test_sync_to_destination() {
    let lib = library_with_gb();
    lib.add_asset("gb", "images", "Tetris (World).png", b"png");

    romsift_cmd()
        .arg("--base-dir")
        .arg(lib.base())
        .arg("--destination-dir")
        .arg(lib.dest())
        .args(["--console-name", "gb", "--initialize"])
        .assert()
        .success()
        .stderr(predicate::str::contains("copied Tetris (World).gb"));

    assert_eq!(lib.mirrored_files("gb"), vec!["Tetris (World).gb"]);
    lib.assert_mirrored("gb/images/Tetris (World).png");
}

#[test]
fn test_second_sync_verifies() {
    let lib = library_with_gb();
    let run = || {
        romsift_cmd()
            .arg("--base-dir")
            .arg(lib.base())
            .arg("--destination-dir")
            .arg(lib.dest())
            .args(["--console-name", "gb", "--initialize"])
            .assert()
            .success()
    };

    run();
    run().stderr(predicate::str::contains("verified Tetris (World).gb"));
}

#[test]
fn test_missing_destination_without_initialize_fails() {
    let lib = library_with_gb();

    // stdin is not a terminal, so the prompt cannot be answered.
    romsift_cmd()
        .arg("--base-dir")
        .arg(lib.base())
        .arg("--destination-dir")
        .arg(lib.dest())
        .args(["--console-name", "gb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));

    lib.assert_not_mirrored("gb");
}

#[test]
fn test_missing_base_dir_fails() {
    let lib = Library::new();

    romsift_cmd()
        .arg("--base-dir")
        .arg(lib.base().join("absent"))
        .args(["--console-name", "gb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Base directory not found"));
}

#[test]
fn test_keep_going_processes_remaining_categories() {
    let lib = library_with_gb();
    lib.add_entries("nes", &["Zelda (USA).nes"]);
    // A directory named like a generated list makes the atomic rename fail.
    fs::create_dir(lib.source("gb").join("whitelist.auto.txt")).unwrap();

    romsift_cmd()
        .arg("--base-dir")
        .arg(lib.base())
        .args(["--console-name", "gb,nes", "--keep-going"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 2 categories failed"));

    assert_eq!(lib.read_list("nes", "whitelist.auto.txt"), vec!["Zelda (USA).nes"]);
}

#[test]
fn test_first_error_stops_run_by_default() {
    let lib = library_with_gb();
    lib.add_entries("nes", &["Zelda (USA).nes"]);
    fs::create_dir(lib.source("gb").join("whitelist.auto.txt")).unwrap();

    romsift_cmd()
        .arg("--base-dir")
        .arg(lib.base())
        .args(["--console-name", "gb,nes"])
        .assert()
        .failure();

    assert!(!lib.source("nes").join("whitelist.auto.txt").exists());
}
