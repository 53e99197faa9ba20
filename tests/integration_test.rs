//! Integration tests for the cidr binary.
//!
//! These run the built executable end to end: arguments, stdin or files in,
//! merged ranges on stdout, errors on stderr with exit status 1.

use std::io::Write;
use std::process::{Command, Output, Stdio};

static BIN: &str = env!("CARGO_BIN_EXE_cidr");
static TEST_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/test_data/");

fn run_cidr(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(BIN)
        .args(args)
        .env("CIDR_LOG_CONFIG", "no-such-log4rs.yml")
        .env("CIDR_LOG_LEVEL", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start cidr");
    // The child may exit before reading everything on a fatal error.
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes());
    child.wait_with_output().expect("Failed to wait for cidr")
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

fn stderr(output: &Output) -> &str {
    std::str::from_utf8(&output.stderr).unwrap()
}

fn data(name: &str) -> String {
    format!("{TEST_DATA}{name}")
}

#[test]
fn test_adjacent_blocks_merge() {
    let output = run_cidr(&[], "10.0.0.0/24\n10.0.1.0/24\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "10.0.0.0/23\n");
}

#[test]
fn test_range_mode() {
    let output = run_cidr(&["-r"], "192.168.1.5-192.168.1.10\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "192.168.1.5-192.168.1.10\n");
}

#[test]
fn test_enumerate_mode() {
    let output = run_cidr(&["-e"], "192.168.1.5-192.168.1.10\n");
    assert_eq!(output.status.code(), Some(0));
    let lines: Vec<&str> = stdout(&output).lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "192.168.1.5");
    assert_eq!(lines[5], "192.168.1.10");
}

#[test]
fn test_reversed_range_fails() {
    let output = run_cidr(&[], "192.168.1.10-192.168.1.5\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(
        stderr(&output).contains("range ends are reversed"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_overlapping_blocks_merge() {
    let output = run_cidr(&["-c"], "10.0.0.0/25\n10.0.0.64/25\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "10.0.0.0/24\n");
}

#[test]
fn test_whole_address_space() {
    let output = run_cidr(&[], "0.0.0.0/0\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "0.0.0.0/0\n");
}

#[test]
fn test_last_mode_flag_wins() {
    let output = run_cidr(&["-e", "-r"], "10.0.0.0/30\n");
    assert_eq!(stdout(&output), "10.0.0.0-10.0.0.3\n");
    let output = run_cidr(&["-r", "-c"], "10.0.0.0/30\n");
    assert_eq!(stdout(&output), "10.0.0.0/30\n");
}

#[test]
fn test_repeated_mode_flag() {
    let output = run_cidr(&["-r", "-r"], "10.0.0.0/30\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "10.0.0.0-10.0.0.3\n");
    let output = run_cidr(&["-ee"], "10.0.0.0/31\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "10.0.0.0\n10.0.0.1\n");
}

#[test]
fn test_empty_input() {
    let output = run_cidr(&[], "");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_files_are_merged_together() {
    let output = run_cidr(&["-r", &data("ranges_a.txt"), &data("ranges_b.txt")], "");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "10.0.0.0-10.0.1.255\n172.16.0.0-172.31.255.255\n192.168.1.5-192.168.1.11\n"
    );
}

#[test]
fn test_files_cidr_output() {
    let output = run_cidr(&[&data("ranges_a.txt"), &data("ranges_b.txt")], "");
    assert_eq!(
        stdout(&output),
        "10.0.0.0/23\n172.16.0.0/12\n192.168.1.5/32\n192.168.1.6/31\n192.168.1.8/30\n"
    );
}

#[test]
fn test_missing_file() {
    let missing = data("does_not_exist.txt");
    let output = run_cidr(&[&data("ranges_a.txt"), &missing], "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains(&missing), "stderr: {}", stderr(&output));
}

#[test]
fn test_bad_line_in_file() {
    let output = run_cidr(&[&data("bad_line.txt")], "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("bad_line.txt:2: invalid address"));
}

#[test]
fn test_blank_line_fails() {
    let output = run_cidr(&[], "10.0.0.1\n\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("<stdin>:2"));
}

#[test]
fn test_line_too_long() {
    let line = format!("10.0.0.1{}\n", "0".repeat(40));
    let output = run_cidr(&[], &line);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("input line too long"));
}

#[test]
fn test_unknown_flag() {
    let output = run_cidr(&["-x"], "10.0.0.1\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(
        stderr(&output).contains("cidr [-cer] [file ...]"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_help() {
    let output = run_cidr(&["--help"], "");
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("-e"));
}
