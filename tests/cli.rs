//! Integration tests for the reprodocs binary output contract.

use std::process::{Command, Output};

/// Run the reprodocs binary with the given arguments.
fn run_reprodocs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reprodocs"))
        .args(args)
        .output()
        .expect("failed to run reprodocs binary")
}

#[test]
fn test_default_run_prints_greeting_then_build_info() {
    let output = run_reprodocs(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2, "expected exactly two output lines");
    assert_eq!(lines[0], "Hello from Reproducible Docs (v1.0.0)!");
    assert!(
        lines[1].starts_with("Build Info: Reproducible Docs v1.0.0 | Java "),
        "unexpected build-info line: {}",
        lines[1]
    );
    assert_eq!(lines[1].matches(" | ").count(), 2);
}

#[test]
fn test_arguments_are_ignored() {
    let output = run_reprodocs(&["extra", "arguments", "are", "ignored"]);
    assert!(output.status.success());

    let baseline = run_reprodocs(&[]);
    assert_eq!(output.stdout, baseline.stdout);
}

#[test]
fn test_output_is_stable_across_runs() {
    // The archive pipeline diffs this output across machines; two runs on the
    // same machine must at minimum be byte-identical.
    let first = run_reprodocs(&[]);
    let second = run_reprodocs(&[]);
    assert_eq!(first.stdout, second.stdout);
}
