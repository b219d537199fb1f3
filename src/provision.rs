//! Virtual environment provisioning

use std::path::Path;

use crate::process::{run_best_effort, CommandLine, StageOutcome};

/// Name of the virtual environment directory inside the project root
pub const ENV_DIR: &str = "venv";

/// `<interpreter> -m venv venv`
pub fn venv_command(interpreter: &str) -> CommandLine {
    CommandLine::new(interpreter).args(["-m", "venv", ENV_DIR])
}

/// Create the project's virtual environment. Never fails the run.
pub fn provision(root: &Path, interpreter: &str) -> StageOutcome {
    run_best_effort(&venv_command(interpreter), root)
}
