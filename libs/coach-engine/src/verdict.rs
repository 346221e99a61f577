/// Outcome judgement - normalization and comparison of captured output.
///
/// **Core responsibility:**
/// Turn one raw interpreter execution into a pass/fail outcome.
///
/// **Judgement priority:**
/// 1. Timeout (fixed message, no output salvaged)
/// 2. Nonzero exit (trimmed stderr becomes the error text)
/// 3. Output comparison
///
/// **Normalization rules:**
/// - `actual` keeps the stdout text with surrounding whitespace trimmed
/// - the equality check strips all whitespace from both sides, so
///   `[0, 1]` and `[0,1]` compare equal
/// - case and everything else are compared exactly; this is not
///   structural/JSON equality
use coach_common::types::{ExecutionOutcome, TestCase};

/// Error text attached to outcomes that exceeded the wall-clock limit.
pub const TIMEOUT_ERROR: &str = "Execution timeout";

/// Raw capture of one interpreter run, produced by the harness.
#[derive(Debug, Clone)]
pub struct RawExecution {
    pub stdout: String,
    pub stderr: String,
    pub exit_ok: bool,
    pub timed_out: bool,
}

/// Judge one raw execution against its test case. The returned outcome's
/// `test_case` index is 0; the orchestrator assigns the real position.
pub fn judge(raw: &RawExecution, test_case: &TestCase) -> ExecutionOutcome {
    if raw.timed_out {
        return ExecutionOutcome::failure(test_case, TIMEOUT_ERROR);
    }

    if !raw.exit_ok {
        let stderr = raw.stderr.trim();
        let error = if stderr.is_empty() {
            "process exited with a nonzero status".to_string()
        } else {
            stderr.to_string()
        };
        return ExecutionOutcome {
            actual: raw.stdout.trim().to_string(),
            ..ExecutionOutcome::failure(test_case, error)
        };
    }

    let actual = raw.stdout.trim().to_string();
    let passed = canonical(&actual) == canonical(&test_case.expected);

    ExecutionOutcome {
        test_case: 0,
        input: test_case.input.clone(),
        expected: test_case.expected.clone(),
        actual,
        passed,
        error: None,
    }
}

fn canonical(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
