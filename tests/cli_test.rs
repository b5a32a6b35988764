// Command-line tests for the lineage binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn lineage() -> Command {
    Command::cargo_bin("lineage").expect("binary should build")
}

#[test]
fn test_resolve_prints_bracket_chart() {
    lineage()
        .args(["resolve", "L1", "--depth", "2", "--store"])
        .arg(fixture("geckos.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Self: ✓ Luna (F) · Lilly White"))
        .stdout(predicate::str::contains("│   ├── Paternal Grandsire: ~ Apollo · User Declared"))
        .stdout(predicate::str::contains("└── Dam: ~ Pearl · User Declared"));
}

#[test]
fn test_resolve_json_output() {
    let output = lineage()
        .args(["resolve", "L1", "--format", "json", "--store"])
        .arg(fixture("geckos.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["id"], "L1");
    assert_eq!(json["sire"]["state"], "verified");
    assert_eq!(json["dam"]["state"], "declared");
}

#[test]
fn test_resolve_mermaid_sequential() {
    lineage()
        .args(["resolve", "A", "-f", "mermaid", "--sequential", "-s"])
        .arg(fixture("cyclic.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graph LR"))
        .stdout(predicate::str::contains(":::cycle"));
}

#[test]
fn test_resolve_missing_root() {
    lineage()
        .args(["resolve", "nobody", "--store"])
        .arg(fixture("geckos.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Individual not found: nobody"));
}

#[test]
fn test_resolve_rejects_zero_depth() {
    lineage()
        .args(["resolve", "L1", "--depth", "0", "--store"])
        .arg(fixture("geckos.json"))
        .assert()
        .failure();
}

#[test]
fn test_resolve_rejects_unknown_format() {
    lineage()
        .args(["resolve", "L1", "--format", "svg", "--store"])
        .arg(fixture("geckos.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_resolve_missing_config() {
    lineage()
        .args(["resolve", "L1", "--config", "/nonexistent/lineage.toml"])
        .assert()
        .failure();
}

#[test]
fn test_check_reports_cycle() {
    lineage()
        .args(["check", "--store"])
        .arg(fixture("cyclic.json"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("cycle: A -> B"));
}

#[test]
fn test_check_clean_directory() {
    lineage()
        .args(["check", "--store"])
        .arg(fixture("records"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3 records: 0 cycles"));
}

#[test]
fn test_check_json() {
    let output = lineage()
        .args(["check", "--json", "--store"])
        .arg(fixture("geckos.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["records"], 4);
    assert_eq!(json["dangling"][0]["parent"], "L1-SIRE-MISSING");
}

#[test]
fn test_version() {
    lineage()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
