use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Languages a submission may declare. Only JavaScript is executable; the
/// others short-circuit to failing outcomes in the run orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Python,
    Java,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
        };
        f.write_str(name)
    }
}

/// One inbound submission. Created per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub language: Language,
    pub code: String,
    pub problem_id: String,
}

/// A curated input/expected pair. The `input` field is a comma-separated
/// list of JSON-style literals; top-level commas delimit positional
/// arguments (e.g. `"[2,7,11,15], 9"` carries two arguments).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected: String,
    pub description: String,
}

/// Per-test-case result of one harness invocation. `test_case` is the
/// 1-based position assigned by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub test_case: u32,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
    pub error: Option<String>,
}

impl ExecutionOutcome {
    /// Failing outcome with no captured output, for cases that never produced
    /// a comparable result (timeouts, faults, unsupported languages).
    pub fn failure(test_case: &TestCase, error: impl Into<String>) -> Self {
        Self {
            test_case: 0,
            input: test_case.input.clone(),
            expected: test_case.expected.clone(),
            actual: String::new(),
            passed: false,
            error: Some(error.into()),
        }
    }
}

/// Aggregated result of running a submission against all of a problem's
/// test cases. Outcome order matches registry order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub outcomes: Vec<ExecutionOutcome>,
    pub overall_passed: bool,
    pub elapsed: Duration,
}

/// A detected data-structure/algorithm pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Array,
    Hashmap,
    Stack,
    Queue,
    Tree,
    Graph,
    Recursion,
    Loop,
    NestedLoop,
    Sorting,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Array => "array",
            Tag::Hashmap => "hashmap",
            Tag::Stack => "stack",
            Tag::Queue => "queue",
            Tag::Tree => "tree",
            Tag::Graph => "graph",
            Tag::Recursion => "recursion",
            Tag::Loop => "loop",
            Tag::NestedLoop => "nested_loop",
            Tag::Sorting => "sorting",
        };
        f.write_str(name)
    }
}

/// Set of tags detected in one submission. Order carries no meaning.
pub type TagSet = BTreeSet<Tag>;

/// Coarse asymptotic complexity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityLabel {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(n)")]
    Linear,
    #[serde(rename = "O(n log n)")]
    Linearithmic,
    #[serde(rename = "O(n²)")]
    Quadratic,
    #[serde(rename = "O(n) to O(2ⁿ)")]
    LinearToExponential,
}

impl fmt::Display for ComplexityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComplexityLabel::Constant => "O(1)",
            ComplexityLabel::Linear => "O(n)",
            ComplexityLabel::Linearithmic => "O(n log n)",
            ComplexityLabel::Quadratic => "O(n²)",
            ComplexityLabel::LinearToExponential => "O(n) to O(2ⁿ)",
        };
        f.write_str(label)
    }
}

/// Structure/complexity analysis of one submission, consumed by the
/// advice-generation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub structures: TagSet,
    pub complexity_hint: ComplexityLabel,
}
