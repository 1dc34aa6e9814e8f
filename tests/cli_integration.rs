//! Integration tests for the `tl` CLI.
//!
//! Each test writes a script and an empty config into a temp directory, runs
//! `tl run` as a subprocess, and verifies stdout and the exit status.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Get the path to the built `tl` binary.
fn tl_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tl");
    path
}

/// An empty config so the user's own config file never leaks into a test.
fn empty_config(root: &Path) -> PathBuf {
    let path = root.join("config.toml");
    fs::write(&path, "").unwrap();
    path
}

/// Run `tl` with the given args, return (stdout, stderr, success).
fn run_tl(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let config = empty_config(dir);
    let output = Command::new(tl_bin())
        .arg("--config")
        .arg(&config)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run tl");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Write `script` to a file and run `tl run <file> [extra...]`, expecting success.
fn run_script_ok(script: &str, extra: &[&str]) -> String {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("script.txt"), script).unwrap();
    let mut args = vec!["run", "script.txt"];
    args.extend_from_slice(extra);
    let (stdout, stderr, success) = run_tl(tmp.path(), &args);
    if !success {
        panic!(
            "tl {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

#[test]
fn test_add_and_toggle() {
    let out = run_script_ok("add Buy milk\nadd Walk the dog\ntoggle 2\n", &[]);
    assert_eq!(
        out,
        "\
added 1: Buy milk
added 2: Walk the dog
toggled 2: done

[ ] 1 Buy milk
[x] 2 Walk the dog
2 tasks \u{b7} 1 done
"
    );
}

#[test]
fn test_duplicate_title_is_rejected() {
    let out = run_script_ok("add Buy milk\nadd Buy milk\n", &[]);
    assert!(out.contains("rejected \"Buy milk\""));
    assert!(out.ends_with("[ ] 1 Buy milk\n1 task \u{b7} 0 done\n"));
}

#[test]
fn test_titles_are_case_sensitive() {
    let out = run_script_ok("add Buy milk\nadd buy milk\n", &[]);
    assert!(out.contains("2 tasks"));
}

#[test]
fn test_edit_allows_duplicate_title() {
    let out = run_script_ok("add A\nadd B\nedit 2 A\n", &[]);
    assert!(out.contains("edited 2: A"));
    assert!(out.contains("[ ] 1 A\n[ ] 2 A\n"));
}

#[test]
fn test_remove_confirmed_and_declined() {
    let out = run_script_ok("add A\nadd B\nremove 1 no\nremove 2 yes\n", &[]);
    assert!(out.contains("kept 1"));
    assert!(out.contains("removed 2: B"));
    assert!(out.ends_with("[ ] 1 A\n1 task \u{b7} 0 done\n"));
}

#[test]
fn test_unknown_id_is_ignored() {
    let out = run_script_ok("add A\ntoggle 42\nedit 42 Z\nremove 42 yes\n", &[]);
    assert_eq!(out.matches("ignored 42: no such task").count(), 3);
    assert!(out.ends_with("[ ] 1 A\n1 task \u{b7} 0 done\n"));
}

#[test]
fn test_list_snapshots_mid_script() {
    let out = run_script_ok("add A\nlist\nadd B\n", &[]);
    assert!(out.contains("list: 1 task \u{b7} 0 done\n  [ ] 1 A\n"));
}

#[test]
fn test_empty_script() {
    let out = run_script_ok("# nothing here\n\n", &[]);
    assert_eq!(out, "(no tasks)\n0 tasks \u{b7} 0 done\n");
}

#[test]
fn test_script_from_stdin() {
    let tmp = TempDir::new().unwrap();
    let config = empty_config(tmp.path());
    let mut child = Command::new(tl_bin())
        .arg("--config")
        .arg(&config)
        .args(["run", "-"])
        .current_dir(tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run tl");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"add From stdin\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("added 1: From stdin"));
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn test_json_output() {
    let out = run_script_ok("add A\nadd B\ntoggle 1\nadd A\n", &["--json"]);
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();

    let events = doc["events"].as_array().unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["event"], "added");
    assert_eq!(events[0]["id"], 1);
    assert_eq!(events[2]["event"], "toggled");
    assert_eq!(events[2]["done"], true);
    assert_eq!(events[3]["event"], "rejected");
    assert_eq!(events[3]["title"], "A");

    let tasks = doc["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["title"], "A");
    assert_eq!(tasks[0]["done"], true);
    assert_eq!(doc["counts"]["total"], 2);
    assert_eq!(doc["counts"]["done"], 1);
}

#[test]
fn test_clock_ids_are_unique_and_increasing() {
    let out = run_script_ok("add A\nadd B\nadd C\n", &["--json", "--ids", "clock"]);
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
    let ids: Vec<u64> = doc["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn test_parse_error_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bad.txt"), "add A\nfrobnicate 1\n").unwrap();
    let (stdout, stderr, success) = run_tl(tmp.path(), &["run", "bad.txt"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("error: line 2"));
    assert!(stderr.contains("frobnicate"));
}

#[test]
fn test_missing_script_file() {
    let tmp = TempDir::new().unwrap();
    let (_, stderr, success) = run_tl(tmp.path(), &["run", "nope.txt"]);
    assert!(!success);
    assert!(stderr.contains("nope.txt"));
}

#[test]
fn test_bad_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("broken.toml");
    fs::write(&config, "[ids]\nstrategy = \"uuid\"\n").unwrap();
    fs::write(tmp.path().join("script.txt"), "add A\n").unwrap();
    let output = Command::new(tl_bin())
        .arg("--config")
        .arg(&config)
        .args(["run", "script.txt"])
        .current_dir(tmp.path())
        .output()
        .expect("failed to run tl");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.toml"));
}

#[test]
fn test_log_dir_receives_log_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("script.txt"), "add A\n").unwrap();
    let logs = tmp.path().join("logs");
    let (_, stderr, success) = run_tl(
        tmp.path(),
        &[
            "--log-dir",
            logs.to_str().unwrap(),
            "--log-level",
            "debug",
            "run",
            "script.txt",
        ],
    );
    assert!(success, "stderr: {}", stderr);
    let entries: Vec<_> = fs::read_dir(&logs).unwrap().collect();
    assert!(!entries.is_empty());
}
