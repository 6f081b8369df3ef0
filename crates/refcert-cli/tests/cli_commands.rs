//! # End-to-end CLI tests
//!
//! Runs the built `refcert` binary and checks stdout, stderr, and exit
//! codes for each subcommand.

use std::io::Write as _;
use std::process::{Command, Output};

fn refcert(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_refcert"))
        .args(args)
        .env_remove("REFCERT_OUTPUT")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run refcert")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn from_legacy_prints_known_identifier() {
    let out = refcert(&["id", "from-legacy", "user", "1"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("id:         user_0000000000000G000000000000"));
}

#[test]
fn from_legacy_accepts_negative_keys() {
    let out = refcert(&["--output", "json", "id", "from-legacy", "user", "-1"]);
    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["id"], "user_7ZZZZZZZZZZZZG000000000000");
    assert_eq!(report["legacy"], -1);
    assert_eq!(report["is_legacy"], true);
}

#[test]
fn inspect_detects_kind() {
    let out = refcert(&[
        "--output",
        "json",
        "id",
        "inspect",
        "ATTEMPT_01HF7YAT00000000000000001A",
    ]);
    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["kind"], "test_attempt");
    assert_eq!(report["id"], "attempt_01HF7YAT00000000000000001A");
    assert_eq!(report["created_at"], "2023-11-14T22:13:20.000Z");
    assert_eq!(report["legacy"], 42);
}

#[test]
fn inspect_rejects_malformed_input() {
    let out = refcert(&["id", "inspect", "user_not-an-id"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("FAIL"));
    assert!(out.stdout.is_empty());
}

#[test]
fn attempt_rejects_pre_epoch_time() {
    let out = refcert(&[
        "id",
        "attempt",
        "--created-at",
        "1969-12-31T23:59:59Z",
        "--legacy",
        "1",
    ]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn new_mints_requested_count() {
    let out = refcert(&["id", "new", "tournament", "--count", "4"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.starts_with("tournament_")));
}

#[test]
fn cert_list_orders_highest_first() {
    let out = refcert(&[
        "cert",
        "list",
        "scorekeeper/twenty",
        "assistant/twentytwo",
        "head/twentyfour",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "head/twentyfour\nassistant/twentytwo\nscorekeeper/twenty\nhighest: head/twentyfour"
    );
}

#[test]
fn cert_list_rejects_unknown_level() {
    let out = refcert(&["cert", "list", "chief/twentyfour"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn cert_compare_json() {
    let out = refcert(&[
        "--output",
        "json",
        "cert",
        "compare",
        "--left",
        "head/twentyfour,flag/twentyfour",
        "--right",
        "flag/twentyfour",
    ]);
    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["superset"], true);
    assert_eq!(report["subset"], false);
    assert_eq!(report["left_only"][0]["level"], "head");
}

#[test]
fn env_and_config_select_output() {
    let out = Command::new(env!("CARGO_BIN_EXE_refcert"))
        .args(["cert", "sort", "head/twentyfour"])
        .env("REFCERT_OUTPUT", "json")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["certifications"][0]["version"], "twentyfour");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"output: json\n").unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let out = refcert(&["--config", &path, "cert", "sort", "flag/eighteen"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(serde_json::from_slice::<serde_json::Value>(&out.stdout).is_ok());
}

#[test]
fn missing_config_is_an_operational_error() {
    let out = refcert(&["--config", "/nonexistent/refcert.yaml", "cert", "sort", "head/twenty"]);
    assert_eq!(out.status.code(), Some(1));
}
