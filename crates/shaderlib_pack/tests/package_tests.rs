//! Asset Packaging Tests
//!
//! Tests for:
//! - Archive contents mirror the input tree
//! - Existing archives are replaced, not appended to
//! - package_assets exit status

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::process::Command;

use shaderlib_pack::{PackageSummary, package_directory};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read_entry(archive: &Path, name: &str) -> String {
    let mut zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut entry = zip.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

// ============================================================================
// Library
// ============================================================================

#[test]
fn package_mirrors_input_tree() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("assets");
    write(&input, "config.json", "{}");
    write(&input, "textures/stone.txt", "stone");
    write(&input, "textures/detail/moss.txt", "moss");
    let output = dir.path().join("dist").join("assets.pak");

    let summary = package_directory(&input, &output).unwrap();

    assert_eq!(
        summary,
        PackageSummary {
            files: 3,
            directories: 2
        }
    );
    assert_eq!(read_entry(&output, "textures/detail/moss.txt"), "moss");
    assert_eq!(read_entry(&output, "config.json"), "{}");
}

#[test]
fn package_replaces_existing_archive() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("assets");
    write(&input, "a.txt", "a");
    let output = dir.path().join("assets.zip");
    fs::write(&output, "stale bytes that are not a zip").unwrap();

    package_directory(&input, &output).unwrap();

    let zip = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
    assert_eq!(zip.len(), 1);
    assert_eq!(read_entry(&output, "a.txt"), "a");
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn cli_missing_input_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("assets.zip");

    let status = Command::new(env!("CARGO_BIN_EXE_package_assets"))
        .arg("--input")
        .arg(dir.path().join("missing"))
        .arg("--output")
        .arg(&output)
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!output.exists());
}

#[test]
fn cli_packs_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("assets");
    write(&input, "shaders/unlit.vert", "void main() {}");
    let output = dir.path().join("assets.zip");

    let status = Command::new(env!("CARGO_BIN_EXE_package_assets"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(read_entry(&output, "shaders/unlit.vert"), "void main() {}");
}
