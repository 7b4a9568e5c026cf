//! CLI tests driving the compiled `monoid` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

/// Run the CLI binary with arguments.
fn run_cli(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_monoid"));
    cmd.args(args);
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with the given text on stdin.
fn run_cli_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_monoid"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("Failed to wait for CLI")
}

/// Expect success and return stdout.
fn stdout_of(output: Output) -> String {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed\nstderr: {}", stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write text to a temporary file.
fn fixture(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn parse_prints_canonical_document() {
    let file = fixture(r#"{"status": "SUCCESS", "message": null}"#);
    let stdout = stdout_of(run_cli(&[
        "parse",
        "--shape",
        "validate-message",
        file.path().to_str().unwrap(),
    ]));
    assert_eq!(stdout.trim(), r#"{"status":"SUCCESS"}"#);
}

#[test]
fn parse_reads_stdin() {
    let stdout = stdout_of(run_cli_stdin(
        &["parse", "--shape", "Schema"],
        r#"{"name":"users","json_schema":{"type":"object"}}"#,
    ));
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["name"], "users");
    assert!(value.get("group").is_none());
}

#[test]
fn parse_rejects_invalid_document() {
    let file = fixture(r#"{"schema_name": "users"}"#);
    let output = run_cli(&["parse", "--shape", "record", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input is not a valid Record"), "stderr: {}", stderr);
}

#[test]
fn parse_rejects_unknown_shape() {
    let output = run_cli(&["parse", "--shape", "envelope"]);
    assert!(!output.status.success());
}

#[test]
fn payload_prints_selected_payload() {
    let file = fixture(
        r#"{"type":"RECORD","record":{"schema_name":"users","data":{"id":1}}}"#,
    );
    let output = run_cli(&["payload", file.path().to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let stdout = stdout_of(output);

    let record: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(record["schema_name"], "users");
    assert_eq!(record["data"]["id"], 1);
    assert!(stderr.contains("RECORD"));
}

#[test]
fn payload_rejects_mismatched_tag() {
    let file = fixture(r#"{"type":"SPEC","validate_msg":{"status":"SUCCESS"}}"#);
    let output = run_cli(&["payload", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
}

const STREAM: &str = r#"{"type":"SPEC","spec":{"name":"postgres"}}
{"type":"RECORD","record":{"schema_name":"users","data":{"id":1}}}
garbage
{"type":"RECORD","record":{"schema_name":"orders","data":{"id":9}}}
"#;

#[test]
fn records_skips_malformed_lines() {
    let file = fixture(STREAM);
    let stdout = stdout_of(run_cli(&["records", file.path().to_str().unwrap()]));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"users\""));
    assert!(lines[1].contains("\"orders\""));
}

#[test]
fn records_skips_invalid_utf8_lines() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"type":"RECORD","record":{"schema_name":"a","data":{}}}"#)
        .unwrap();
    file.write_all(b"\n\xff\xfe garbage\n").unwrap();
    file.write_all(br#"{"type":"RECORD","record":{"schema_name":"b","data":{}}}"#)
        .unwrap();
    file.write_all(b"\nnot json\n").unwrap();

    let stdout = stdout_of(run_cli(&["records", file.path().to_str().unwrap()]));
    assert_eq!(stdout.lines().count(), 2);

    let output = run_cli(&["records", "--strict", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr: {}", stderr);
}

#[test]
fn records_filters_by_schema() {
    let output = run_cli_stdin(&["records", "--schema", "orders"], STREAM);
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let stdout = stdout_of(output);
    assert!(
        stderr.lines().any(|l| l.ends_with("1 record")),
        "stderr: {}",
        stderr
    );
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["data"]["id"], 9);
}

#[test]
fn records_strict_fails_on_malformed_line() {
    let file = fixture(STREAM);
    let output = run_cli(&["records", "--strict", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 3"), "stderr: {}", stderr);
}

#[test]
fn shapes_lists_every_shape() {
    let stdout = stdout_of(run_cli(&["shapes"]));
    assert_eq!(stdout.lines().count(), 9);
    assert!(stdout.contains("query-identifier"));
    assert!(stdout.contains("Protocol"));
}

#[test]
fn version_flag_prints_version() {
    let stdout = stdout_of(run_cli(&["--version"]));
    assert!(stdout.starts_with("monoid "), "stdout: {}", stdout);
}
