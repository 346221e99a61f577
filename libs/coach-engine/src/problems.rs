// Problem catalog: curated test cases and entry-point names per problem
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use coach_common::types::TestCase;
use serde::{Deserialize, Serialize};

/// Entry point used when a problem does not declare one.
pub const DEFAULT_ENTRY_POINT: &str = "solution";

const BUILTIN_CATALOG: &str = include_str!("../config/problems.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    /// Name of the function the execution driver invokes. Explicit
    /// configuration; never inferred from the problem id.
    pub entry_point: String,
    pub test_cases: Vec<TestCase>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProblemsDocument {
    problems: Vec<Problem>,
}

/// Read-only problem registry, constructed once at startup.
///
/// Unknown problem ids never fail a lookup: they resolve to a single
/// generic case and the default entry point, which callers must treat as
/// "no curated cases", not an error.
#[derive(Debug, Clone)]
pub struct ProblemRegistry {
    problems: HashMap<String, Problem>,
}

impl ProblemRegistry {
    /// Build the registry from the catalog embedded in the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("embedded problem catalog is malformed")
    }

    /// Load a catalog from an external JSON document.
    pub fn load(catalog_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(catalog_path)
            .with_context(|| format!("failed to read {}", catalog_path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("failed to parse {}", catalog_path.display()))
    }

    fn from_json(content: &str) -> Result<Self> {
        let document: ProblemsDocument = serde_json::from_str(content)?;

        let mut problems = HashMap::new();
        for problem in document.problems {
            problems.insert(problem.id.clone(), problem);
        }

        Ok(Self { problems })
    }

    pub fn get(&self, problem_id: &str) -> Option<&Problem> {
        self.problems.get(problem_id)
    }

    /// Ordered test cases for a problem. Unknown ids fall back to one
    /// generic case.
    pub fn test_cases(&self, problem_id: &str) -> Vec<TestCase> {
        match self.get(problem_id) {
            Some(problem) if !problem.test_cases.is_empty() => problem.test_cases.clone(),
            _ => vec![generic_case()],
        }
    }

    /// Entry-point function name for a problem, `solution` when unknown.
    pub fn entry_point(&self, problem_id: &str) -> &str {
        self.get(problem_id)
            .map(|problem| problem.entry_point.as_str())
            .unwrap_or(DEFAULT_ENTRY_POINT)
    }

    /// All known problem ids, sorted for stable listings.
    pub fn list(&self) -> Vec<&Problem> {
        let mut problems: Vec<&Problem> = self.problems.values().collect();
        problems.sort_by(|a, b| a.id.cmp(&b.id));
        problems
    }
}

fn generic_case() -> TestCase {
    TestCase {
        input: String::new(),
        expected: String::new(),
        description: "no curated cases for this problem".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let registry = ProblemRegistry::builtin().expect("builtin catalog");
        assert!(!registry.list().is_empty());
    }

    #[test]
    fn two_sum_has_three_ordered_cases() {
        let registry = ProblemRegistry::builtin().unwrap();
        let cases = registry.test_cases("two-sum");

        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].input, "[2,7,11,15], 9");
        assert_eq!(cases[0].expected, "[0,1]");
        assert_eq!(cases[1].input, "[3,2,4], 6");
        assert_eq!(cases[1].expected, "[1,2]");
        assert_eq!(cases[2].input, "[3,3], 6");
        assert_eq!(cases[2].expected, "[0,1]");
    }

    #[test]
    fn entry_points_come_from_the_catalog() {
        let registry = ProblemRegistry::builtin().unwrap();
        assert_eq!(registry.entry_point("two-sum"), "twoSum");
        assert_eq!(registry.entry_point("valid-parentheses"), "validParentheses");
    }

    #[test]
    fn unknown_problem_falls_back_to_generic_case() {
        let registry = ProblemRegistry::builtin().unwrap();
        let cases = registry.test_cases("no-such-problem");

        assert_eq!(cases.len(), 1);
        assert!(cases[0].input.is_empty());
        assert_eq!(cases[0].description, "no curated cases for this problem");
        assert_eq!(registry.entry_point("no-such-problem"), DEFAULT_ENTRY_POINT);
    }

    #[test]
    fn every_problem_declares_an_entry_point_and_cases() {
        let registry = ProblemRegistry::builtin().unwrap();
        for problem in registry.list() {
            assert!(!problem.entry_point.is_empty(), "{}", problem.id);
            assert!(!problem.test_cases.is_empty(), "{}", problem.id);
        }
    }
}
