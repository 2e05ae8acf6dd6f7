// Allow deprecated APIs (assert_cmd::cargo_bin is deprecated but still works)
#![allow(deprecated)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const SCRIPT: &str = r##"{
    "width": 120,
    "height": 80,
    "ops": [
        {"op": "rect", "x": 0, "y": 0, "width": 120, "height": 80, "colour": "#252525"},
        {"op": "thickness", "width": 4},
        {"op": "line", "x": 0, "y": 40, "x1": 120, "y1": 40, "colour": "#ff0000"},
        {"op": "arc", "x": 30, "y": 20, "radius": 10, "start": 0, "end": 6.2831855, "colour": "#0000ff", "fill": true}
    ]
}"##;

fn write_script(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("script.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_renders_script_to_png() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = write_script(dir.path(), SCRIPT);
    let output = dir.path().join("out.png");

    let mut cmd = Command::cargo_bin("drawspace")?;
    cmd.arg("--input").arg(&input).arg("--output").arg(&output);
    cmd.assert().success();

    let img = image::open(&output)?.to_rgba8();
    assert_eq!(img.dimensions(), (120, 80));
    assert_eq!(img.get_pixel(100, 10).0, [0x25, 0x25, 0x25, 255]);
    assert_eq!(img.get_pixel(100, 40).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(30, 20).0, [0, 0, 255, 255]);
    Ok(())
}

#[test]
fn test_overwrites_existing_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = write_script(dir.path(), SCRIPT);
    let output = dir.path().join("out.png");
    fs::write(&output, b"stale")?;

    let mut cmd = Command::cargo_bin("drawspace")?;
    cmd.arg("-i").arg(&input).arg("-o").arg(&output);
    cmd.assert().success();

    assert!(fs::read(&output)?.starts_with(b"\x89PNG"));
    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let mut cmd = Command::cargo_bin("drawspace")?;
    cmd.arg("--input")
        .arg(dir.path().join("nope.json"))
        .arg("--output")
        .arg(dir.path().join("out.png"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
    Ok(())
}

#[test]
fn test_unsupported_format() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = write_script(dir.path(), SCRIPT);
    let output = dir.path().join("out.jpg");

    let mut cmd = Command::cargo_bin("drawspace")?;
    cmd.arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--format")
        .arg("jpeg");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported export format: jpeg"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_invalid_colour_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = write_script(
        dir.path(),
        r#"{"width": 10, "height": 10, "ops": [
            {"op": "rect", "x": 0, "y": 0, "width": 5, "height": 5, "colour": "red"}
        ]}"#,
    );
    let output = dir.path().join("out.png");

    let mut cmd = Command::cargo_bin("drawspace")?;
    cmd.arg("--input").arg(&input).arg("--output").arg(&output);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Colour must start with '#': red"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_malformed_script() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = write_script(dir.path(), r#"{"width": 10}"#);

    let mut cmd = Command::cargo_bin("drawspace")?;
    cmd.arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(dir.path().join("out.png"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse drawing script"));
    Ok(())
}

#[test]
fn test_min_text_size_must_be_positive() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = write_script(dir.path(), SCRIPT);
    let output = dir.path().join("out.png");

    let mut cmd = Command::cargo_bin("drawspace")?;
    cmd.arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--min-text-size=0");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("min-text-size must be positive, got 0"));
    assert!(!output.exists());
    Ok(())
}
