//! CLI Integration Tests
//!
//! These tests run the `stallgallery` binary against temporary site roots.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command rooted at a temporary site
fn cli_cmd(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stallgallery").expect("Failed to find stallgallery binary");
    cmd.arg("--root").arg(root.path());
    cmd
}

fn add_photo(root: &TempDir, category: &str, name: &str) {
    let dir = root.path().join("photos").join(category);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), b"photo").unwrap();
}

fn write_jpeg(path: &Path, width: u32, height: u32) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbImage::from_pixel(width, height, Rgb([180, 120, 60]))
        .save_with_format(path, image::ImageFormat::Jpeg)
        .unwrap();
}

// ============================================================================
// Scan Command Tests
// ============================================================================

#[test]
fn test_scan_writes_manifest() {
    let root = TempDir::new().unwrap();
    add_photo(&root, "Korean", "kimchi.jpg");
    add_photo(&root, "Korean", "bibimbap.png");
    add_photo(&root, "Desserts", "tart.webp");

    cli_cmd(&root)
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 photos in Korean"))
        .stdout(predicate::str::contains("3 total photos"));

    let manifest = fs::read_to_string(root.path().join("photos.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(value["Korean"], serde_json::json!(["bibimbap.png", "kimchi.jpg"]));
    assert_eq!(value["Chinese"], serde_json::json!([]));
}

#[test]
fn test_scan_with_explicit_categories_keeps_order() {
    let root = TempDir::new().unwrap();
    add_photo(&root, "Western", "steak.jpg");
    add_photo(&root, "Chinese", "bao.jpg");

    let output = cli_cmd(&root)
        .args(["scan", "--categories", "Western,Chinese", "--print"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let western = text.find("Western").unwrap();
    let chinese = text.find("Chinese").unwrap();
    assert!(western < chinese);
    assert!(!root.path().join("photos.json").exists());
}

#[test]
fn test_scan_discover() {
    let root = TempDir::new().unwrap();
    add_photo(&root, "Street Food", "satay.jpg");

    cli_cmd(&root)
        .args(["scan", "--discover", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Street Food"))
        .stdout(predicate::str::contains("satay.jpg"))
        .stdout(predicate::str::contains("Desserts").not());
}

#[test]
fn test_scan_missing_photos_dir_fails() {
    let root = TempDir::new().unwrap();

    cli_cmd(&root)
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Photos directory not found"));
}

// ============================================================================
// Compress Command Tests
// ============================================================================

#[test]
fn test_compress_reports_totals() {
    let root = TempDir::new().unwrap();
    write_jpeg(&root.path().join("photos").join("Drinks").join("chai.jpg"), 300, 100);
    add_photo(&root, "Drinks", "broken.jpg");

    cli_cmd(&root)
        .args(["compress", "--max-size", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total photos processed: 1"))
        .stdout(predicate::str::contains("Failed: 1"));

    let img = image::open(root.path().join("photos").join("Drinks").join("chai.jpg")).unwrap();
    assert_eq!((img.width(), img.height()), (150, 50));
}

#[test]
fn test_compress_rejects_bad_quality() {
    let root = TempDir::new().unwrap();

    cli_cmd(&root)
        .args(["compress", "--quality", "0"])
        .assert()
        .failure();
}

// ============================================================================
// Help Tests
// ============================================================================

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("stallgallery")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("compress"))
        .stdout(predicate::str::contains("serve"));
}
