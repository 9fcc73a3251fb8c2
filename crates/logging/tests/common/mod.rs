//! Helpers for re-running a single test in a child process.
//!
//! Records write to the real stderr by design, so stream-level assertions
//! inspect a child's captured output and exit status instead of hooking the
//! stream in-process. Each test re-executes the current test binary filtered
//! down to itself, with an environment marker selecting the child branch.

use std::env;
use std::process::{Command, Output};

const CHILD_CASE_ENV: &str = "LOGGING_TEST_CHILD_CASE";

/// Reports whether the current process is the re-executed child for `case`.
pub fn in_child(case: &str) -> bool {
    env::var(CHILD_CASE_ENV).as_deref() == Ok(case)
}

/// Reruns the current test binary filtered to `case` and captures its output.
pub fn run_child(case: &str) -> Output {
    let exe = env::current_exe().expect("test binary path is available");
    Command::new(exe)
        .args([case, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_CASE_ENV, case)
        .output()
        .expect("child test process runs to completion")
}

/// Splits captured stderr into complete lines, asserting on the trailing
/// newline so partial writes are caught rather than silently tolerated.
pub fn stderr_lines(output: &Output) -> Vec<String> {
    let stderr = String::from_utf8(output.stderr.clone()).expect("stderr is valid UTF-8");
    if stderr.is_empty() {
        return Vec::new();
    }
    assert!(
        stderr.ends_with('\n'),
        "stderr does not end with a newline: {stderr:?}"
    );
    stderr[..stderr.len() - 1]
        .split('\n')
        .map(str::to_owned)
        .collect()
}
