//! Integration tests for gfxpack-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use common::CannedResponse;
use common::ZipTestBuilder;
use common::serve;
use predicates::prelude::*;
use tempfile::TempDir;

const PAGE: &str = r#"<a href="/slashiee/cemu_graphic_packs/releases/download/Github300/graphicPacks300.zip">graphicPacks300.zip</a>"#;

fn gfxpack_cmd() -> Command {
    cargo_bin_cmd!("gfxpack")
}

fn archive() -> Vec<u8> {
    ZipTestBuilder::new()
        .add_directory("ZeldaTP/")
        .add_file("ZeldaTP/rules.txt", b"[Definition]")
        .add_file("BreathOfTheWild/rules.txt", b"excluded")
        .build()
}

fn update_cmd(base: &str, temp: &TempDir) -> Command {
    let mut cmd = gfxpack_cmd();
    cmd.arg("--no-wait")
        .arg("--release-url")
        .arg(format!("{base}/slashiee/cemu_graphic_packs/releases"))
        .arg("--download-dir")
        .arg(temp.path())
        .arg("--output-dir")
        .arg(temp.path().join("graphicPacks"));
    cmd
}

#[test]
fn test_version_flag() {
    gfxpack_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gfxpack"));
}

#[test]
fn test_help_flag() {
    gfxpack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line updater"))
        .stdout(predicate::str::contains("--no-wait"));
}

#[test]
fn test_update_downloads_and_extracts() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (base, server) = serve(vec![CannedResponse::ok(PAGE), CannedResponse::ok(archive())]);

    update_cmd(&base, &temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Graphic Packs Updater"))
        .stdout(predicate::str::contains("loading"))
        .stdout(predicate::str::contains("downloading"))
        .stdout(predicate::str::contains("update done!"))
        .stdout(predicate::str::contains("Items written: 2"))
        .stdout(predicate::str::contains("Press 'Enter'").not());

    assert_eq!(
        server.join().unwrap(),
        [
            "GET /slashiee/cemu_graphic_packs/releases/latest HTTP/1.1",
            "GET /slashiee/cemu_graphic_packs/releases/download/Github300/graphicPacks300.zip HTTP/1.1",
        ]
    );
    assert!(temp.path().join("graphicPacks300.zip").is_file());
    assert!(temp.path().join("graphicPacks/ZeldaTP/rules.txt").is_file());
    assert!(!temp.path().join("graphicPacks/BreathOfTheWild").exists());
}

#[test]
fn test_update_reports_up_to_date() {
    let temp = TempDir::new().expect("failed to create temp dir");
    std::fs::write(temp.path().join("graphicPacks300.zip"), b"previous").unwrap();
    let (base, server) = serve(vec![CannedResponse::ok(PAGE)]);

    update_cmd(&base, &temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("up-to-date"))
        .stdout(predicate::str::contains("graphicPacks300.zip"));

    assert_eq!(server.join().unwrap().len(), 1);
    assert!(!temp.path().join("graphicPacks").exists());
}

#[test]
fn test_failure_exits_zero_with_message() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (base, server) = serve(vec![CannedResponse::status(404)]);

    update_cmd(&base, &temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR"))
        .stdout(predicate::str::contains("HTTP 404"))
        .stdout(predicate::str::contains("HINT"));

    server.join().unwrap();
}

#[test]
fn test_missing_asset_reported() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (base, server) = serve(vec![CannedResponse::ok("<html>nothing here</html>")]);

    update_cmd(&base, &temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not find the graphic packs archive"));

    server.join().unwrap();
}

#[test]
fn test_prompt_skipped_without_terminal() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (base, server) = serve(vec![CannedResponse::status(404)]);

    gfxpack_cmd()
        .arg("--release-url")
        .arg(format!("{base}/releases"))
        .arg("--download-dir")
        .arg(temp.path())
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press 'Enter'").not());

    server.join().unwrap();
}

#[test]
fn test_json_output_format() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (base, server) = serve(vec![CannedResponse::ok(PAGE), CannedResponse::ok(archive())]);

    let output = update_cmd(&base, &temp)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "update");
    assert_eq!(json["data"]["result"], "updated");
    assert_eq!(json["data"]["file_name"], "graphicPacks300.zip");
    assert_eq!(json["data"]["files_extracted"], 1);
    assert_eq!(json["data"]["entries_skipped"], 1);
    assert_eq!(json["data"]["items_written"], 2);

    server.join().unwrap();
}

#[test]
fn test_json_error_output() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (base, server) = serve(vec![CannedResponse::status(500)]);

    let output = update_cmd(&base, &temp)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "error");
    assert!(json["error"].as_str().unwrap().contains("HTTP 500"));

    server.join().unwrap();
}

#[test]
fn test_quiet_suppresses_progress() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let (base, server) = serve(vec![CannedResponse::ok(PAGE), CannedResponse::ok(archive())]);

    update_cmd(&base, &temp)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    server.join().unwrap();
    assert!(temp.path().join("graphicPacks/ZeldaTP/rules.txt").is_file());
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    gfxpack_cmd()
        .args(["--verbose", "--quiet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
