// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests for the `lox` binary: exit codes and stream routing.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn source_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".lox")
        .tempfile()
        .expect("create temp source");
    file.write_all(content.as_bytes()).expect("write temp source");
    file
}

fn path(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

fn lox(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lox"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run lox binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn lex_clean_file() {
    let file = source_file("print \"hi\";\n");
    let output = lox(&["lex", path(&file)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "PRINT 'print' @ 1\nSTRING '\"hi\"' hi @ 1\nSEMICOLON ';' @ 1\nEOF '' @ 2\n"
    );
    assert!(stderr(&output).is_empty());
}

#[test]
fn lex_file_with_errors_exits_65() {
    let file = source_file("var a = 1 @ 2;");
    let output = lox(&["lex", path(&file)]);

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        stderr(&output),
        "[line 1] Error: Unexpected character '@'.\n"
    );
    assert!(stdout(&output).ends_with("EOF '' @ 1\n"));
}

#[test]
fn check_clean_file() {
    let file = source_file("var a = 1;");
    let output = lox(&["check", path(&file)]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("ok (6 tokens)"));
}

#[test]
fn check_reports_coded_diagnostics() {
    let file = source_file("\"open\n/* x *");
    let output = lox(&["check", "--color=never", path(&file)]);

    assert_eq!(output.status.code(), Some(65));
    let err = stderr(&output);
    assert!(err.contains("[line 2] error[E0001]: Unterminated string."));
    assert!(err.contains("error: aborting due to previous error"));
}

#[test]
fn check_lists_every_error_on_a_line() {
    let file = source_file("@ # $");
    let output = lox(&["check", "--color=never", path(&file)]);

    assert_eq!(output.status.code(), Some(65));
    let err = stderr(&output);
    assert_eq!(err.matches("[line 1] error[E0002]").count(), 3);
    assert!(err.ends_with("error: aborting due to 3 previous errors\n"));
}

#[test]
fn check_rejects_bad_flag() {
    let file = source_file("1");
    let output = lox(&["check", "--color=plaid", path(&file)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid --color value 'plaid'"));
}

#[test]
fn missing_file_exits_1() {
    let output = lox(&["lex", "/nonexistent/dir/missing.lox"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot find file"));
}

#[test]
fn explain_prints_docs() {
    let output = lox(&["explain", "E0003"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("# E0003"));
}

#[test]
fn unknown_command_exits_1() {
    let output = lox(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown command: frobnicate"));
}
