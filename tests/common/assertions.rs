//! Assertion macros for CLI tests.
//!
//! These macros print both streams on failure to aid debugging.

/// Assert that stdout or stderr contains a pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "requires an upload directory");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a run failed with exit status 1.
#[macro_export]
macro_rules! assert_failed {
    ($result:expr) => {
        assert!(
            !$result.success && $result.exit_code == 1,
            "Expected exit status 1, got {}\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}
