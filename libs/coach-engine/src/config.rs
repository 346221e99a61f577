// Harness configuration
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the execution harness: which interpreter to spawn and
/// how long a single test case may run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Interpreter binary invoked for each test case.
    #[serde(default = "default_command")]
    pub command: String,
    /// Extra arguments passed before the execution-unit path.
    #[serde(default)]
    pub args: Vec<String>,
    /// Wall-clock limit per test case.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Where scratch directories are created; the system temp dir when unset.
    #[serde(default)]
    pub scratch_root: Option<PathBuf>,
}

fn default_command() -> String {
    "node".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
            timeout_ms: default_timeout_ms(),
            scratch_root: None,
        }
    }
}
