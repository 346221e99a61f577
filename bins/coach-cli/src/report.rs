// Terminal rendering of run results
use coach_common::types::{Analysis, RunResult};

pub fn render_run(result: &RunResult) -> String {
    let mut out = String::new();

    for outcome in &result.outcomes {
        let status = if outcome.passed { "PASSED" } else { "FAILED" };
        out.push_str(&format!("Test Case {}: {}\n", outcome.test_case, status));
        out.push_str(&format!("Input: {}\n", outcome.input));
        let actual = if outcome.actual.is_empty() {
            "No output"
        } else {
            outcome.actual.as_str()
        };
        out.push_str(&format!("Output: {}\n", actual));
        out.push_str(&format!("Expected: {}\n", outcome.expected));
        if let Some(error) = &outcome.error {
            out.push_str(&format!("Error: {}\n", error));
        }
        out.push('\n');
    }

    if result.overall_passed {
        out.push_str("All test cases passed!\n");
    } else {
        out.push_str("Some test cases failed.\n");
    }
    out.push_str(&format!(
        "Execution time: {:.3}s\n",
        result.elapsed.as_secs_f64()
    ));

    out
}

pub fn render_analysis(analysis: &Analysis) -> String {
    let structures = if analysis.structures.is_empty() {
        "none detected".to_string()
    } else {
        analysis
            .structures
            .iter()
            .map(|tag| tag.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Structures: {}\nComplexity: {}\n",
        structures, analysis.complexity_hint
    )
}
