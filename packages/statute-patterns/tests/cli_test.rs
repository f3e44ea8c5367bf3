//! Integration tests for the statute-patterns CLI binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    #[allow(clippy::expect_used)]
    Command::cargo_bin("statute-patterns").expect("binary exists")
}

#[test]
fn test_extract_plain_output() {
    cmd()
        .args(["extract", "under P.D. No. 971 and R.A. 3844"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pd 971"))
        .stdout(predicate::str::contains("ra 3844"));
}

#[test]
fn test_extract_json_output() {
    cmd()
        .args(["extract", "--json", "Rep Act No. 386"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"ra\""))
        .stdout(predicate::str::contains("\"id\": \"386\""));
}

#[test]
fn test_extract_reads_stdin() {
    cmd()
        .arg("extract")
        .write_stdin("the old Spanish Civil Code")
        .assert()
        .success()
        .stdout(predicate::str::contains("spain civil"));
}

#[test]
fn test_extract_no_citations() {
    cmd()
        .args(["extract", "plain prose without citations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No statute citations found."));
}

#[test]
fn test_count_merges_mentions() {
    cmd()
        .args([
            "count",
            "Republic Act No. 386, also known as the Civil Code of the Philippines",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ra 386 x2"));
}

#[test]
fn test_title_prints_serial_title() {
    cmd()
        .args(["title", "ra", "386"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Republic Act No. 386\n"));

    cmd()
        .args(["title", "bp", "22"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Batas Pambansa Blg. 22\n"));
}

#[test]
fn test_title_unknown_category_fails() {
    cmd()
        .args(["title", "zz", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown statute category"));
}

#[test]
fn test_details_from_fixture_corpus() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("statutes");

    cmd()
        .args(["details", "ra", "386", "--base"])
        .arg(&base)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"ra-386-1949-06-18\""))
        .stdout(predicate::str::contains("Civil Code of the Philippines"));
}

#[test]
fn test_details_missing_statute() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .args(["details", "ra", "99999", "--base"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No details found for"));
}
