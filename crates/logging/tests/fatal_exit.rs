//! Integration tests for the fatal emission path.
//!
//! `fatal` terminates the calling process, so these tests re-execute the
//! test binary: the parent invocation spawns a child filtered down to one
//! helper test with an environment marker set, and asserts on the child's
//! exit status and stderr. Without the marker the helpers return
//! immediately, so a normal test run treats them as trivial passes.

use logging::{fatal_log, fatal_logf, Logger};
use std::env;
use std::process::Command;

const FATAL_LINE_MARKER: &str = "OC_LOG_TEST_FATAL_LINE";
const FATAL_TEMPLATE_MARKER: &str = "OC_LOG_TEST_FATAL_TEMPLATE";

fn run_child(helper: &str, marker: &str) -> std::process::Output {
    Command::new(env::current_exe().expect("test binary path"))
        .args([helper, "--exact", "--nocapture"])
        .env(marker, "1")
        .output()
        .expect("spawn child test process")
}

/// Child helper: dies through the joined-values fatal path when marked.
#[test]
fn helper_fatal_line() {
    if env::var_os(FATAL_LINE_MARKER).is_some() {
        let mut logger = Logger::new();
        fatal_log!(logger, "bye");
    }
}

/// Child helper: dies through the template fatal path when marked.
#[test]
fn helper_fatal_template() {
    if env::var_os(FATAL_TEMPLATE_MARKER).is_some() {
        let mut logger = Logger::new();
        fatal_logf!(logger, "giving up after {} retries\n", 3);
    }
}

/// Verifies fatal writes its line to stderr and exits with status 1.
#[test]
fn fatal_writes_line_and_exits_nonzero() {
    let output = run_child("helper_fatal_line", FATAL_LINE_MARKER);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bye\n"), "stderr: {stderr}");
}

/// Verifies the template fatal path renders verbatim before exiting.
#[test]
fn fatal_template_renders_before_exit() {
    let output = run_child("helper_fatal_template", FATAL_TEMPLATE_MARKER);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("giving up after 3 retries\n"),
        "stderr: {stderr}"
    );
}

/// Verifies no test-runner epilogue follows the fatal exit.
///
/// A child that exits through `fatal` never reaches libtest's "test result"
/// summary, confirming nothing runs after the call.
#[test]
fn nothing_executes_after_fatal() {
    let output = run_child("helper_fatal_line", FATAL_LINE_MARKER);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("test result: ok"), "stdout: {stdout}");
}
