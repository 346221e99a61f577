/// Execution harness - isolated, time-bounded runs of untrusted code.
///
/// **Core responsibility:**
/// Run a submission against one test case in a fresh interpreter process
/// and capture what happened.
///
/// **Execution rules:**
/// 1. Decompose the test-case input into positional arguments
/// 2. Synthesize a driver that invokes the entry point and prints the result
/// 3. Write code + driver to a uniquely named scratch directory
/// 4. Spawn the interpreter with a hard wall-clock timeout
/// 5. Hand the raw capture to [`crate::verdict`] for judgement
///
/// **Guarantees:**
/// - The scratch directory is removed on every exit path, including
///   timeout and panic (drop-based cleanup)
/// - A timed-out interpreter is killed, its output discarded
/// - Infrastructure faults (scratch creation, spawn failure) surface as a
///   failing outcome; a single bad test case never aborts the run
use std::process::Stdio;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tempfile::TempDir;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use coach_common::types::{ExecutionOutcome, TestCase};

use crate::config::HarnessConfig;
use crate::verdict::{self, RawExecution};

pub struct NodeHarness {
    config: HarnessConfig,
}

impl NodeHarness {
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Execute `code` against one test case and judge the result.
    pub async fn execute(
        &self,
        code: &str,
        entry_point: &str,
        test_case: &TestCase,
    ) -> ExecutionOutcome {
        match self.run_interpreter(code, entry_point, test_case).await {
            Ok(raw) => verdict::judge(&raw, test_case),
            Err(fault) => {
                warn!(error = %fault, "test case failed before the interpreter could run");
                ExecutionOutcome::failure(test_case, format!("{fault:#}"))
            }
        }
    }

    async fn run_interpreter(
        &self,
        code: &str,
        entry_point: &str,
        test_case: &TestCase,
    ) -> Result<RawExecution> {
        let arguments = split_arguments(&test_case.input);
        let driver = synthesize_driver(code, entry_point, &arguments);

        let scratch = match &self.config.scratch_root {
            Some(root) => TempDir::new_in(root),
            None => TempDir::new(),
        }
        .context("failed to create scratch directory")?;

        let unit_path = scratch.path().join("submission.js");
        tokio::fs::write(&unit_path, driver)
            .await
            .context("failed to write execution unit")?;

        let child = Command::new(&self.config.command)
            .args(&self.config.args)
            .arg(&unit_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn interpreter `{}`", self.config.command))?;

        let limit = Duration::from_millis(self.config.timeout_ms);
        let started = Instant::now();

        // `scratch` is dropped on every path below, removing the unit.
        match timeout(limit, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                debug!(
                    entry_point,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    exit_ok = output.status.success(),
                    "interpreter finished"
                );
                Ok(RawExecution {
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    exit_ok: output.status.success(),
                    timed_out: false,
                })
            }
            Ok(Err(io_fault)) => {
                Err(io_fault).context("failed to collect interpreter output")
            }
            Err(_) => {
                // The elapsed future is dropped here, which kills the child.
                warn!(
                    entry_point,
                    timeout_ms = self.config.timeout_ms,
                    "interpreter exceeded the wall-clock limit"
                );
                Ok(RawExecution {
                    stdout: String::new(),
                    stderr: String::new(),
                    exit_ok: false,
                    timed_out: true,
                })
            }
        }
    }
}

/// Split a test-case input into positional arguments on top-level commas.
///
/// Commas inside brackets, braces, parentheses, or double-quoted strings
/// do not delimit, so `"[2,7,11,15], 9"` yields two arguments and
/// `"[], [1]"` keeps both arrays intact.
fn split_arguments(input: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut previous = ' ';

    for c in input.chars() {
        if c == '"' && previous != '\\' {
            in_string = !in_string;
        }
        if !in_string {
            match c {
                '[' | '{' | '(' => depth += 1,
                ']' | '}' | ')' => depth -= 1,
                ',' if depth == 0 => {
                    arguments.push(current.trim().to_string());
                    current.clear();
                    previous = c;
                    continue;
                }
                _ => {}
            }
        }
        current.push(c);
        previous = c;
    }

    if !current.trim().is_empty() {
        arguments.push(current.trim().to_string());
    }

    arguments
}

/// Concatenate the submission with a driver that calls the entry point and
/// serializes the return value to one stdout line. A thrown error goes to
/// stderr and forces a nonzero exit, which the verdict maps to a runtime
/// failure.
fn synthesize_driver(code: &str, entry_point: &str, arguments: &[String]) -> String {
    format!(
        r#"{code}

try {{
    const __result = {entry_point}({arguments});
    console.log(JSON.stringify(__result));
}} catch (err) {{
    console.error(err instanceof Error ? err.stack || err.message : String(err));
    process.exit(1);
}}
"#,
        code = code,
        entry_point = entry_point,
        arguments = arguments.join(", "),
    )
}
