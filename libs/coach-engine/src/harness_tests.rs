/// Integration tests for the execution harness.
///
/// Tests that need a real interpreter are `#[ignore]`d and expect a
/// Node.js binary on PATH. The rest run anywhere: they configure the
/// harness with an interpreter that cannot exist and assert the failure
/// paths.
use uuid::Uuid;

use coach_common::types::{Language, Submission, TestCase};

use crate::config::HarnessConfig;
use crate::harness::NodeHarness;
use crate::verdict::TIMEOUT_ERROR;
use crate::CoachService;

const TWO_SUM_SOLUTION: &str = r#"
function twoSum(nums, target) {
    const seen = new Map();
    for (let i = 0; i < nums.length; i++) {
        const complement = target - nums[i];
        if (seen.has(complement)) {
            return [seen.get(complement), i];
        }
        seen.set(nums[i], i);
    }
    return [];
}
"#;

fn make_case(input: &str, expected: &str) -> TestCase {
    TestCase {
        input: input.to_string(),
        expected: expected.to_string(),
        description: "case".to_string(),
    }
}

fn make_submission(code: &str) -> Submission {
    Submission {
        id: Uuid::new_v4(),
        language: Language::JavaScript,
        code: code.to_string(),
        problem_id: "two-sum".to_string(),
    }
}

#[tokio::test]
async fn spawn_failure_is_reported_not_raised() {
    let harness = NodeHarness::new(HarnessConfig {
        command: "coach-no-such-interpreter".to_string(),
        ..HarnessConfig::default()
    });

    let outcome = harness
        .execute(TWO_SUM_SOLUTION, "twoSum", &make_case("[2,7,11,15], 9", "[0,1]"))
        .await;

    assert!(!outcome.passed);
    assert!(outcome.actual.is_empty());
    let error = outcome.error.as_deref().unwrap();
    assert!(error.contains("coach-no-such-interpreter"), "{error}");
}

#[tokio::test]
async fn scratch_root_is_empty_after_spawn_failure() {
    let root = tempfile::tempdir().unwrap();
    let harness = NodeHarness::new(HarnessConfig {
        command: "coach-no-such-interpreter".to_string(),
        scratch_root: Some(root.path().to_path_buf()),
        ..HarnessConfig::default()
    });

    let _ = harness
        .execute(TWO_SUM_SOLUTION, "twoSum", &make_case("[2,7,11,15], 9", "[0,1]"))
        .await;

    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}

#[tokio::test]
#[ignore] // Requires a Node.js binary on PATH
async fn two_sum_round_trip_passes_all_curated_cases() {
    let service = CoachService::with_builtin_problems().unwrap();
    let submission = make_submission(TWO_SUM_SOLUTION);

    let result = service.run(&submission).await;

    assert!(result.overall_passed, "outcomes: {:?}", result.outcomes);
    assert_eq!(result.outcomes.len(), 3);
    let indices: Vec<u32> = result.outcomes.iter().map(|o| o.test_case).collect();
    assert_eq!(indices, vec![1, 2, 3]);
    assert!(result.elapsed.as_secs() < 30);
}

#[tokio::test]
#[ignore] // Requires a Node.js binary on PATH
async fn wrong_answer_fails_without_error_text() {
    let harness = NodeHarness::new(HarnessConfig::default());
    let code = "function twoSum(nums, target) { return [4, 5]; }";

    let outcome = harness
        .execute(code, "twoSum", &make_case("[2,7,11,15], 9", "[0,1]"))
        .await;

    assert!(!outcome.passed);
    assert_eq!(outcome.actual, "[4,5]");
    assert!(outcome.error.is_none());
}

#[tokio::test]
#[ignore] // Requires a Node.js binary on PATH
async fn output_comparison_ignores_internal_whitespace() {
    let harness = NodeHarness::new(HarnessConfig::default());
    // The driver prints compact JSON, so expect a spaced form here.
    let code = "function twoSum(nums, target) { return [0, 1]; }";

    let outcome = harness
        .execute(code, "twoSum", &make_case("[2,7,11,15], 9", "[0, 1]"))
        .await;

    assert!(outcome.passed, "{:?}", outcome);
}

#[tokio::test]
#[ignore] // Requires a Node.js binary on PATH
async fn thrown_error_lands_on_stderr() {
    let harness = NodeHarness::new(HarnessConfig::default());
    let code = "function twoSum() { throw new Error('web malfunction'); }";

    let outcome = harness
        .execute(code, "twoSum", &make_case("[2,7,11,15], 9", "[0,1]"))
        .await;

    assert!(!outcome.passed);
    let error = outcome.error.as_deref().unwrap();
    assert!(error.contains("web malfunction"), "{error}");
}

#[tokio::test]
#[ignore] // Requires a Node.js binary on PATH
async fn syntax_error_is_a_failing_outcome() {
    let harness = NodeHarness::new(HarnessConfig::default());
    let code = "function twoSum(nums target) { return [ }";

    let outcome = harness
        .execute(code, "twoSum", &make_case("[2,7,11,15], 9", "[0,1]"))
        .await;

    assert!(!outcome.passed);
    assert!(outcome.error.is_some());
}

#[tokio::test]
#[ignore] // Requires a Node.js binary on PATH
async fn runaway_submission_is_killed_at_the_limit() {
    let harness = NodeHarness::new(HarnessConfig {
        timeout_ms: 1000,
        ..HarnessConfig::default()
    });
    let code = "function twoSum() { while (true) {} }";

    let outcome = harness
        .execute(code, "twoSum", &make_case("[2,7,11,15], 9", "[0,1]"))
        .await;

    assert!(!outcome.passed);
    assert_eq!(outcome.error.as_deref(), Some(TIMEOUT_ERROR));
    assert!(outcome.actual.is_empty());
}

#[tokio::test]
#[ignore] // Requires a Node.js binary on PATH
async fn scratch_root_is_empty_after_success_and_timeout() {
    let root = tempfile::tempdir().unwrap();
    let harness = NodeHarness::new(HarnessConfig {
        timeout_ms: 1000,
        scratch_root: Some(root.path().to_path_buf()),
        ..HarnessConfig::default()
    });

    let ok = harness
        .execute(TWO_SUM_SOLUTION, "twoSum", &make_case("[2,7,11,15], 9", "[0,1]"))
        .await;
    assert!(ok.passed);
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);

    let timed_out = harness
        .execute(
            "function twoSum() { while (true) {} }",
            "twoSum",
            &make_case("[2,7,11,15], 9", "[0,1]"),
        )
        .await;
    assert_eq!(timed_out.error.as_deref(), Some(TIMEOUT_ERROR));
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}
