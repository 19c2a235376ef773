//! End-to-end tests for the rpncalc binary
//!
//! Runs the compiled binary with piped stdin. With no terminal attached the
//! line editor reads plain lines, so prompts appear in stdout alongside output.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rpncalc"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn rpncalc");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for rpncalc")
}

#[test]
fn test_quit_command() {
    let output = run_binary("1 2 +\nq\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("###RPN###"));
    assert!(stdout.contains("[stack] 3"));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let output = run_binary("2 3 ^\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[stack] 8"));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn test_errors_go_to_stderr() {
    let output = run_binary("10 0 /\ns\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("Error: Division by zero"));
    assert!(stdout.contains("[stack] (empty)"));
    assert!(!stdout.contains("Division by zero"));
}
