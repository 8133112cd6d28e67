use assert_cmd::Command;
use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_circle_mut;
use predicates::prelude::*;
use std::path::Path;

fn write_disk_png(path: &Path, size: u32, radius: i32) {
    let mut img = GrayImage::from_pixel(size, size, Luma([15]));
    let c = (size / 2) as i32;
    draw_filled_circle_mut(&mut img, (c, c), radius, Luma([240]));
    img.save(path).expect("save synthetic disk");
}

fn cmd() -> Command {
    Command::cargo_bin("trunk-metrics").expect("binary built")
}

#[test]
fn health_reports_healthy() {
    cmd()
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"healthy\""));
}

#[test]
fn species_lists_default_and_oak() {
    cmd()
        .arg("species")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Default\"").and(predicate::str::contains("\"Oak\"")));
}

#[test]
fn estimate_prints_measurement_json() {
    let dir = tempfile::tempdir().unwrap();
    let img = dir.path().join("trunk.png");
    write_disk_png(&img, 256, 100);

    cmd()
        .args(["estimate", "--image"])
        .arg(&img)
        .args(["--species", "Oak"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"dbh\"")
                .and(predicate::str::contains("\"girth\""))
                .and(predicate::str::contains("\"height\""))
                .and(predicate::str::contains("\"canopy\"")),
        );
}

#[test]
fn missing_image_fails_with_kind_on_stderr() {
    cmd()
        .args(["estimate", "--image", "/no/such/trunk.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not_found"));
}

#[test]
fn uniform_image_fails_with_no_trunk_detected() {
    let dir = tempfile::tempdir().unwrap();
    let img = dir.path().join("flat.png");
    GrayImage::from_pixel(96, 96, Luma([120])).save(&img).unwrap();

    cmd()
        .args(["estimate", "--image"])
        .arg(&img)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_trunk_detected"));
}
