//! Assertions over captured pwbox output.

use std::process::Output;

use predicates::Predicate;
pub use predicates::prelude::PredicateBooleanExt;
pub use predicates::str::contains;

pub fn assert_success(output: &Output) {
    assert!(output.status.success(), "pwbox failed:\n{}", stderr(output));
}

pub fn assert_failure(output: &Output) {
    assert!(!output.status.success(), "pwbox unexpectedly succeeded");
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Check stdout against `pred`, e.g. `contains("x")` or `contains("x").not()`.
pub fn assert_stdout(output: &Output, pred: impl Predicate<str>) {
    let out = stdout(output);
    assert!(pred.eval(&out), "stdout fails `{}`:\n{}", pred, out);
}

pub fn assert_stderr(output: &Output, pred: impl Predicate<str>) {
    let err = stderr(output);
    assert!(pred.eval(&err), "stderr fails `{}`:\n{}", pred, err);
}

/// Ids printed one per line on stdout.
pub fn printed_ids(output: &Output) -> Vec<String> {
    stdout(output)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
