/// Run orchestration - one submission against a problem's test cases.
///
/// **Core responsibility:**
/// Sequence harness invocations, assign stable 1-based outcome indices,
/// aggregate the overall verdict, and time the whole batch.
///
/// **Boundary:**
/// The orchestrator never judges output (verdict's job) and never touches
/// processes (harness's job). Submissions in a language the harness cannot
/// run are short-circuited to failing outcomes without invoking it.
use std::time::Instant;

use tracing::{debug, info, warn};

use coach_common::types::{ExecutionOutcome, Language, RunResult, Submission, TestCase};

use crate::harness::NodeHarness;

/// Execute every test case in order and aggregate the result.
///
/// `overall_passed` is a logical AND across all outcomes; `elapsed` covers
/// the whole batch, not a single case. Test cases run sequentially, each in
/// its own interpreter process.
pub async fn run_submission(
    harness: &NodeHarness,
    submission: &Submission,
    entry_point: &str,
    test_cases: &[TestCase],
) -> RunResult {
    let started = Instant::now();

    info!(
        submission_id = %submission.id,
        problem_id = %submission.problem_id,
        language = %submission.language,
        test_cases = test_cases.len(),
        "starting run"
    );

    if submission.language != Language::JavaScript {
        warn!(
            language = %submission.language,
            "unsupported language, short-circuiting all test cases"
        );
        let outcomes: Vec<ExecutionOutcome> = test_cases
            .iter()
            .enumerate()
            .map(|(index, test_case)| ExecutionOutcome {
                test_case: (index + 1) as u32,
                ..ExecutionOutcome::failure(
                    test_case,
                    format!(
                        "Language {} execution not implemented yet",
                        submission.language
                    ),
                )
            })
            .collect();

        return RunResult {
            overall_passed: outcomes.iter().all(|outcome| outcome.passed),
            outcomes,
            elapsed: started.elapsed(),
        };
    }

    let mut outcomes = Vec::with_capacity(test_cases.len());
    let mut overall_passed = true;

    for (index, test_case) in test_cases.iter().enumerate() {
        debug!(test_case = index + 1, "executing test case");

        let mut outcome = harness
            .execute(&submission.code, entry_point, test_case)
            .await;
        outcome.test_case = (index + 1) as u32;

        overall_passed &= outcome.passed;
        outcomes.push(outcome);
    }

    let elapsed = started.elapsed();

    info!(
        submission_id = %submission.id,
        overall_passed,
        elapsed_ms = elapsed.as_millis() as u64,
        "run finished"
    );

    RunResult {
        outcomes,
        overall_passed,
        elapsed,
    }
}
