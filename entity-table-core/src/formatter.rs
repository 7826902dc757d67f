//! External Formatter - Best-Effort Post-Process
//!
//! The generated file is already on disk when the formatter runs, so a
//! formatter failure is reported, never raised.

use serde::Serialize;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

pub const DEFAULT_FORMATTER: &str = "moonfmt";
pub const DEFAULT_FORMATTER_ARGS: [&str; 1] = ["-w"];

/// How to invoke the formatter: `<program> <args...> <output>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for FormatterSpec {
    fn default() -> Self {
        Self {
            program: DEFAULT_FORMATTER.to_string(),
            args: DEFAULT_FORMATTER_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Result of the formatter step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormatOutcome {
    /// Formatting was disabled for this run
    Skipped,
    Formatted,
    NotFound { program: String },
    SpawnFailed { reason: String },
    /// Exited non-zero; `code` is `None` when killed by a signal
    Failed { code: Option<i32> },
}

impl FormatOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Formatted | Self::Skipped)
    }
}

impl FormatterSpec {
    /// Create from user-supplied settings with validation
    pub fn from_user(program: &str, args: Vec<String>) -> Result<Self, &'static str> {
        if program.trim().is_empty() {
            return Err("Formatter program must not be empty");
        }
        if args.iter().any(|a| a.is_empty()) {
            return Err("Formatter arguments must not be empty strings");
        }
        Ok(Self {
            program: program.to_string(),
            args,
        })
    }

    /// Run the formatter in place on `path` and wait for it.
    pub fn run(&self, path: &Path) -> FormatOutcome {
        let program = match which::which(&self.program) {
            Ok(p) => p,
            Err(e) => {
                warn!(program = %self.program, error = %e, "formatter not found, output left unformatted");
                return FormatOutcome::NotFound {
                    program: self.program.clone(),
                };
            }
        };

        debug!(program = %program.display(), args = ?self.args, file = %path.display(), "running formatter");

        match Command::new(&program).args(&self.args).arg(path).status() {
            Ok(status) if status.success() => FormatOutcome::Formatted,
            Ok(status) => {
                warn!(program = %self.program, code = ?status.code(), "formatter exited with failure");
                FormatOutcome::Failed { code: status.code() }
            }
            Err(e) => {
                warn!(program = %self.program, error = %e, "failed to spawn formatter");
                FormatOutcome::SpawnFailed { reason: e.to_string() }
            }
        }
    }
}
