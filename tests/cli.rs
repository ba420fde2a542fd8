use assert_cmd::Command;
use image::{GenericImageView, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn write_source(dir: &TempDir, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.path().join("source.png");
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 131 + y * 71 + x * y * 7) % 256) as u8;
        Rgb([v, 255 - v, ((x + y) % 4) as u8 * 60 + 10])
    })
    .save(&path)
    .unwrap();
    path
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::open(path).unwrap().dimensions()
}

#[test]
fn resizes_to_the_requested_size() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, 14, 10);
    let output = dir.path().join("out.png");

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&source)
        .arg(&output)
        .args(&["--width", "10", "--height", "8"])
        .assert()
        .success();

    assert_eq!(dimensions(&output), (10, 8));
}

#[test]
fn omitted_and_oversized_dimensions_are_left_alone() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, 9, 7);
    let output = dir.path().join("out.png");

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&source)
        .arg(&output)
        .args(&["--height", "100"])
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().to_rgb8(), image::open(&source).unwrap().to_rgb8());
}

#[test]
fn enormous_dimension_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, 8, 6);
    let output = dir.path().join("out.png");

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&source)
        .arg(&output)
        .args(&["--width", "99999999999999999999", "--height", "4"])
        .assert()
        .success();

    assert_eq!(dimensions(&output), (8, 4));
}

#[test]
fn writes_seam_and_energy_pictures_at_the_original_size() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, 12, 9);
    let output = dir.path().join("out.png");
    let seams = dir.path().join("seams.png");
    let energy = dir.path().join("energy.png");

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&source)
        .arg(&output)
        .args(&["--width", "9", "--height", "7"])
        .arg("--seams")
        .arg(&seams)
        .arg("--energy")
        .arg(&energy)
        .assert()
        .success();

    assert_eq!(dimensions(&output), (9, 7));
    assert_eq!(dimensions(&energy), (12, 9));
    let painted = image::open(&seams).unwrap().to_rgb8();
    assert_eq!(painted.dimensions(), (12, 9));
    let red = painted.pixels().filter(|&&p| p == Rgb([255, 0, 0])).count();
    // Three columns of nine pixels, then two rows of nine; no pixel is
    // removed twice and the source has no pure red of its own.
    assert_eq!(red, 3 * 9 + 2 * 9);
}

#[test]
fn missing_source_is_reported() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(dir.path().join("does-not-exist.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read image"));

    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn negative_dimension_is_rejected_before_reading() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(dir.path().join("does-not-exist.png"))
        .arg(dir.path().join("out.png"))
        .args(&["--width", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid target width"));
}

#[test]
fn garbage_dimension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, 5, 5);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&source)
        .arg(dir.path().join("out.png"))
        .args(&["--height", "tall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid target height"));
}
