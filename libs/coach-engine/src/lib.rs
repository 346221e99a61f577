pub mod analyzer;
pub mod complexity;
pub mod config;
pub mod harness;
pub mod problems;
pub mod runner;
pub mod verdict;

#[cfg(test)]
mod harness_tests;

use anyhow::Result;

use coach_common::types::{Analysis, RunResult, Submission};

use crate::config::HarnessConfig;
use crate::harness::NodeHarness;
use crate::problems::ProblemRegistry;

/// Analyze a submission's source text: detected structures plus a
/// complexity hint. Pure and deterministic.
pub fn analyze(code: &str) -> Analysis {
    let structures = analyzer::classify(code);
    let complexity_hint = complexity::estimate(&structures);

    Analysis {
        structures,
        complexity_hint,
    }
}

/// The coaching core: problem registry plus execution harness.
///
/// Constructed once at startup and immutable afterwards; the calling layer
/// (HTTP API, CLI) borrows it for every request. Holds no per-submission
/// state, so a single instance serves concurrent callers.
pub struct CoachService {
    registry: ProblemRegistry,
    harness: NodeHarness,
}

impl CoachService {
    pub fn new(registry: ProblemRegistry, config: HarnessConfig) -> Self {
        Self {
            registry,
            harness: NodeHarness::new(config),
        }
    }

    /// Service backed by the embedded problem catalog and default harness
    /// configuration.
    pub fn with_builtin_problems() -> Result<Self> {
        Ok(Self::new(ProblemRegistry::builtin()?, HarnessConfig::default()))
    }

    pub fn registry(&self) -> &ProblemRegistry {
        &self.registry
    }

    pub fn analyze(&self, code: &str) -> Analysis {
        analyze(code)
    }

    /// Run a submission against its problem's curated test cases.
    pub async fn run(&self, submission: &Submission) -> RunResult {
        let entry_point = self.registry.entry_point(&submission.problem_id);
        let test_cases = self.registry.test_cases(&submission.problem_id);

        runner::run_submission(&self.harness, submission, entry_point, &test_cases).await
    }
}
