use std::io::Write;
use std::process::{Command, Output, Stdio};
use storygen_test_utils::{AGE_VALIDATION_STORY, MULTI_SCENARIO_STORY};
use tempfile::TempDir;

fn storygen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_storygen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn story_file(dir: &TempDir, text: &str) -> String {
    let path = dir.path().join("story.txt");
    std::fs::write(&path, text).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn parse_prints_summary() {
    let dir = TempDir::new().unwrap();
    let file = story_file(&dir, AGE_VALIDATION_STORY);

    let output = storygen(&["parse", &file]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Value Statement\n  As a Chase Bank product owner"));
    assert!(stdout.contains("Requirements (3)\n"));
    assert!(stdout.contains("  Scenario: User age is valid\n"));
}

#[test]
fn topology_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_storygen"))
        .args(["topology", "-", "--json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(AGE_VALIDATION_STORY.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["events"], serde_json::json!(["aoaApplicantDataCleansedErrored"]));
}

#[test]
fn generate_writes_package_layout() {
    let dir = TempDir::new().unwrap();
    let file = story_file(&dir, MULTI_SCENARIO_STORY);
    let out_dir = dir.path().join("generated");
    let config = dir.path().join("storygen.toml");
    std::fs::write(
        &config,
        "package_name = \"com.bank.steps\"\nharness_package = \"com.bank.harness\"\n",
    )
    .unwrap();

    let output = storygen(&[
        "generate",
        &file,
        "--config",
        &config.to_string_lossy(),
        "--out-dir",
        &out_dir.to_string_lossy(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let feature = std::fs::read_to_string(out_dir.join("do_something.feature")).unwrap();
    assert!(feature.starts_with("Feature: Do something\n"));

    let java =
        std::fs::read_to_string(out_dir.join("com/bank/steps/DoSomethingSteps.java")).unwrap();
    assert!(java.starts_with("package com.bank.steps;\n"));
    assert!(java.contains("import com.bank.harness.MultiServiceTestHarness;\n"));
}

#[test]
fn package_flag_beats_config() {
    let dir = TempDir::new().unwrap();
    let file = story_file(&dir, MULTI_SCENARIO_STORY);
    let config = dir.path().join("storygen.toml");
    std::fs::write(&config, "package_name = \"com.bank.steps\"\n").unwrap();

    let output = storygen(&[
        "generate",
        &file,
        "--config",
        &config.to_string_lossy(),
        "--package",
        "org.override",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("==> org/override/DoSomethingSteps.java <==\npackage org.override;\n"));
}

#[test]
fn errors_exit_with_one() {
    let dir = TempDir::new().unwrap();
    let file = story_file(&dir, "{panel:title=Requirements}\n1. only\n{panel}");

    let output = storygen(&["parse", &file]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("story must contain a value statement panel"));

    let missing = storygen(&["parse", "/definitely/not/here.txt"]);
    assert_eq!(missing.status.code(), Some(1));
    assert!(String::from_utf8(missing.stderr)
        .unwrap()
        .contains("failed to read story"));
}

#[test]
fn bad_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let file = story_file(&dir, MULTI_SCENARIO_STORY);
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "unknown_key = 1\n").unwrap();

    let output = storygen(&["generate", &file, "--config", &config.to_string_lossy()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("failed to load config"));
}
