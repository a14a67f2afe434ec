//! CLI behavior tests for the md, annotations, and explain subcommands,
//! plus config-file layering.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const IMAGE: &str = "registry.example.com/app:1.2.3";

/// Helper to get a Command for the imagegate binary.
#[allow(deprecated)]
fn imagegate_cmd() -> Command {
    Command::cargo_bin("imagegate").expect("imagegate binary not found")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crates dir")
        .parent()
        .expect("repo root")
        .join("tests")
        .join("fixtures")
}

/// Run eval on a fixture and return the report path (kept alive by the
/// returned TempDir).
fn eval_fixture(fixture: &str, branch: &str, extra: &[&str]) -> (TempDir, PathBuf, std::process::Output) {
    let scan_path = fixtures_dir().join(fixture).join("scan.sarif.json");
    let temp_dir = TempDir::new().expect("temp dir");
    let report_path = temp_dir.path().join("report.json");

    let mut cmd = imagegate_cmd();
    cmd.arg("eval")
        .arg("--input")
        .arg(&scan_path)
        .arg("--image")
        .arg(IMAGE)
        .arg("--branch")
        .arg(branch)
        .arg("--out")
        .arg(&report_path);
    for arg in extra {
        cmd.arg(arg);
    }
    let output = cmd.output().expect("run eval");
    (temp_dir, report_path, output)
}

#[test]
fn eval_emits_warning_annotation_on_non_protected_block() {
    let (_dir, _report, output) = eval_fixture("critical_block", "feature/x", &[]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("::warning::imagegate: block_critical"),
        "expected a warning annotation, got: {stdout}"
    );
}

#[test]
fn eval_names_blocking_counts_on_abort() {
    let (_dir, _report, output) = eval_fixture("six_high", "main", &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("6 high findings exceed threshold 5"),
        "abort message should name the counts, got: {stderr}"
    );
}

#[test]
fn md_command_renders_from_report() {
    let (_dir, report_path, output) = eval_fixture("critical_block", "main", &[]);
    assert_eq!(output.status.code(), Some(1));

    let output = imagegate_cmd()
        .arg("md")
        .arg("--report")
        .arg(&report_path)
        .output()
        .expect("run md command");

    assert!(output.status.success(), "md command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BLOCK (critical)"), "should contain verdict");
    assert!(stdout.contains("| Critical | 1 |"), "should contain table");
}

#[test]
fn annotations_command_renders_error_lines_for_abort() {
    let (_dir, report_path, output) = eval_fixture("critical_block", "main", &[]);
    assert_eq!(output.status.code(), Some(1));

    let output = imagegate_cmd()
        .arg("annotations")
        .arg("--report")
        .arg(&report_path)
        .output()
        .expect("run annotations command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("::error::imagegate: block_critical"),
        "should contain GHA error annotation, got: {stdout}"
    );
}

#[test]
fn config_file_sets_protected_branch() {
    let scan_path = fixtures_dir().join("critical_block").join("scan.sarif.json");
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("imagegate.toml");
    std::fs::write(&config_path, "protected_branch = \"release\"\n").expect("write config");
    let report_path = temp_dir.path().join("report.json");

    // Branch "release" matches the configured protected branch: abort.
    imagegate_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("eval")
        .arg("--input")
        .arg(&scan_path)
        .arg("--image")
        .arg(IMAGE)
        .arg("--branch")
        .arg("release")
        .arg("--out")
        .arg(&report_path)
        .assert()
        .code(1);

    // And "main" no longer is protected: warn and continue.
    imagegate_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("eval")
        .arg("--input")
        .arg(&scan_path)
        .arg("--image")
        .arg(IMAGE)
        .arg("--branch")
        .arg("main")
        .arg("--out")
        .arg(&report_path)
        .assert()
        .success();
}

#[test]
fn invalid_config_is_a_usage_error() {
    let scan_path = fixtures_dir().join("clean").join("scan.sarif.json");
    let temp_dir = TempDir::new().expect("temp dir");
    let config_path = temp_dir.path().join("imagegate.toml");
    std::fs::write(&config_path, "high_threshold = \"lots\"\n").expect("write config");

    imagegate_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("eval")
        .arg("--input")
        .arg(&scan_path)
        .arg("--image")
        .arg(IMAGE)
        .arg("--branch")
        .arg("main")
        .arg("--out")
        .arg(temp_dir.path().join("report.json"))
        .assert()
        .failure();
}

#[test]
fn sbom_pointer_attaches_when_file_exists() {
    let scan_path = fixtures_dir().join("clean").join("scan.sarif.json");
    let temp_dir = TempDir::new().expect("temp dir");
    let sbom_path = temp_dir.path().join("sbom.cdx.json");
    std::fs::write(&sbom_path, "{}").expect("write sbom");
    let report_path = temp_dir.path().join("report.json");

    imagegate_cmd()
        .arg("eval")
        .arg("--input")
        .arg(&scan_path)
        .arg("--image")
        .arg(IMAGE)
        .arg("--branch")
        .arg("main")
        .arg("--sbom")
        .arg(&sbom_path)
        .arg("--out")
        .arg(&report_path)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("read"))
            .expect("parse");
    assert_eq!(report["artifacts"][0]["kind"], "sbom");
}

#[test]
fn explain_known_code_succeeds() {
    imagegate_cmd()
        .arg("explain")
        .arg("dark_data_fallback")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark-Data Fallback"));
}

#[test]
fn explain_unknown_code_fails_and_lists_codes() {
    imagegate_cmd()
        .arg("explain")
        .arg("nonexistent_code")
        .assert()
        .failure()
        .stderr(predicate::str::contains("block_critical"));
}

#[test]
fn md_with_missing_report_fails() {
    imagegate_cmd()
        .arg("md")
        .arg("--report")
        .arg(Path::new("/nonexistent/report.json"))
        .assert()
        .failure();
}
