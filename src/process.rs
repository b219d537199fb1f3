//! Best-effort external commands
//!
//! Both optional stages (virtual environment, git init) shell out to a tool
//! found on PATH and must never abort the run. [`run_best_effort`] is the one
//! place that does this: resolve the tool, run it once in the project root,
//! and turn every failure into a warning plus a [`StageOutcome::Failure`].

use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::process::Command;

use crate::config::log_debug;
use crate::error::StageError;

/// Outcome of an optional stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageOutcome {
    NotRequested,
    Success,
    Failure { reason: String },
}

impl StageOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StageOutcome::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, StageOutcome::Failure { .. })
    }
}

/// Program plus arguments, resolved against PATH at run time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Run a command once in `working_dir`, downgrading any failure to a warning.
pub fn run_best_effort(command: &CommandLine, working_dir: &Path) -> StageOutcome {
    match run(command, working_dir) {
        Ok(()) => {
            log_debug("process", &format!("`{command}` succeeded"));
            StageOutcome::Success
        }
        Err(e) => {
            eprintln!("{} {}", "⚠️ ".yellow(), e);
            StageOutcome::Failure {
                reason: e.to_string(),
            }
        }
    }
}

/// Run a command once, surfacing why it failed.
pub fn run(command: &CommandLine, working_dir: &Path) -> Result<(), StageError> {
    let tool = command.program().to_string();

    let resolved = which::which(command.program())
        .map_err(|_| StageError::ToolUnavailable { tool: tool.clone() })?;
    log_debug(
        "process",
        &format!(
            "running `{command}` ({}) in {}",
            resolved.display(),
            working_dir.display()
        ),
    );

    let output = Command::new(&resolved)
        .args(command.arguments())
        .current_dir(working_dir)
        .output()
        .map_err(|source| StageError::Spawn {
            tool: tool.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(StageError::ProcessFailed {
            tool,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
