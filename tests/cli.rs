//! End-to-end tests that drive the `small-image-zapper` binary.

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_image(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([200, 30, 30]))
        .save(path)
        .unwrap();
}

/// One subfolder with two small images, one large image and a text file.
fn setup_photo_folder() -> TempDir {
    let dir = TempDir::new().unwrap();
    let album = dir.path().join("album");
    fs::create_dir_all(&album).unwrap();
    fs::create_dir_all(dir.path().join("empty")).unwrap();

    write_image(&album.join("icon.png"), 32, 32);
    write_image(&album.join("button.gif"), 40, 20);
    write_image(&album.join("photo.png"), 800, 600);
    fs::write(album.join("notes.txt"), "not an image").unwrap();

    dir
}

fn zapper() -> Command {
    Command::cargo_bin("small-image-zapper").unwrap()
}

#[test]
fn dry_run_counts_without_deleting() {
    let dir = setup_photo_folder();

    zapper()
        .arg(dir.path())
        .args(["--immediate", "--debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Debug mode enabled. No files will be deleted.",
        ))
        .stdout(predicate::str::contains(
            "Deleted 2 files out of 4 found.",
        ))
        .stdout(predicate::str::contains("Processed 1 folders"));

    assert!(dir.path().join("album/icon.png").exists());
    assert!(dir.path().join("album/button.gif").exists());
}

#[test]
fn hard_delete_removes_small_images() {
    let dir = setup_photo_folder();

    zapper()
        .arg(dir.path())
        .args(["--immediate", "--hard-delete"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 files out of 4 found."));

    assert!(!dir.path().join("album/icon.png").exists());
    assert!(!dir.path().join("album/button.gif").exists());
    assert!(dir.path().join("album/photo.png").exists());
    assert!(dir.path().join("album/notes.txt").exists());
}

#[test]
fn skip_ext_protects_listed_extensions() {
    let dir = setup_photo_folder();

    zapper()
        .arg(dir.path())
        .args(["-i", "--hard-delete", "--skip-ext", "gif, txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 files out of 4 found."));

    assert!(dir.path().join("album/button.gif").exists());
}

#[test]
fn verbose_lists_decisions() {
    let dir = setup_photo_folder();

    zapper()
        .arg(dir.path())
        .args(["-i", "-d", "-v", "-s", "gif"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing folder:"))
        .stdout(predicate::str::contains("(4 files)"))
        .stdout(predicate::str::contains("Skipping extension for file:"))
        .stdout(predicate::str::contains("Small image:"))
        .stdout(predicate::str::contains("Unsupported file:"))
        .stdout(predicate::str::contains("Skipping extensions: .gif"));
}

#[test]
fn min_pixels_flag_changes_threshold() {
    let dir = setup_photo_folder();

    zapper()
        .arg(dir.path())
        .args(["-i", "-d", "--min-pixels", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 files out of 4 found."));
}

#[test]
fn json_output_reports_counters() {
    let dir = setup_photo_folder();

    let output = zapper()
        .arg(dir.path())
        .args(["-i", "-d", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_folders"], 1);
    assert_eq!(json["total_files"], 4);
    assert_eq!(json["deleted_files"], 2);
    assert!(json["elapsed_ms"].is_u64());
}

#[test]
fn config_file_is_applied_and_flags_override_it() {
    let dir = setup_photo_folder();
    let config = dir.path().join("zapper.toml");
    fs::write(&config, "min_pixels = 1000\ndebug_only = true\n").unwrap();

    zapper()
        .arg(dir.path().join("album"))
        .args(["-i", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 files out of 4 found."));

    zapper()
        .arg(dir.path().join("album"))
        .args(["-i", "--min-pixels", "240000", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 files out of 4 found."));

    assert!(dir.path().join("album/icon.png").exists());
}

#[test]
fn invalid_config_file_fails() {
    let dir = setup_photo_folder();
    let config = dir.path().join("zapper.toml");
    fs::write(&config, "min_pixel = 1000\n").unwrap();

    zapper()
        .arg(dir.path())
        .args(["-i", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn missing_folder_fails_cleanly() {
    let dir = TempDir::new().unwrap();

    zapper()
        .arg(dir.path().join("nope"))
        .args(["-i"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Folder does not exist"));
}

#[test]
fn blank_folder_fails_cleanly() {
    zapper()
        .args(["  ", "-i"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path required"));
}

#[test]
fn folder_is_required() {
    zapper().arg("-i").assert().failure();
}

#[test]
fn gen_config_prints_stock_file() {
    zapper()
        .arg("--gen-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("min_pixels = 240000"))
        .stdout(predicate::str::contains("skip_extensions = []"));
}

#[test]
fn waits_for_enter_without_immediate() {
    let dir = setup_photo_folder();

    zapper()
        .arg(dir.path())
        .arg("-d")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter to continue."))
        .stdout(predicate::str::contains("Root path:"));
}
