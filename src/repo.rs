//! Repository initialization
//!
//! Two steps, no retries: check the tool is on PATH, then run `init` in the
//! project root. A missing tool and a non-zero exit both end as
//! [`StageOutcome::Failure`].

use std::path::Path;

use crate::process::{run_best_effort, CommandLine, StageOutcome};

/// Metadata directory `git init` creates
pub const METADATA_DIR: &str = ".git";

pub fn init_command(tool: &str) -> CommandLine {
    CommandLine::new(tool).arg("init")
}

/// Initialize a repository in `root`. Never fails the run.
pub fn init_repo(root: &Path, tool: &str) -> StageOutcome {
    run_best_effort(&init_command(tool), root)
}
