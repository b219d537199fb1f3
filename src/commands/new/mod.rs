//! Create a new Python project skeleton
//!
//! Public interface (this file) + implementation in `internal/`.
//!
//! # Process
//!
//! 1. **Resolve input**: flags, or interactive prompts when the name is omitted
//! 2. **Materialize**: create the project directory and write the template files
//! 3. **Provision**: create `venv/` (unless `--no-venv`)
//! 4. **Repository**: run `git init` (only with `--init-git`)
//! 5. **Report**: human-readable summary or JSON
//!
//! Steps 3 and 4 are best-effort. Their failures print a warning and leave
//! the exit code at 0.

mod internal;

use anyhow::Result;
use std::path::PathBuf;

use seedling::Platform;

/// Raw command-line input, before validation
#[derive(Debug, Clone, Default)]
pub struct NewArgs {
    pub name: Option<String>,
    pub init_git: bool,
    pub no_venv: bool,
    pub platform: Option<Platform>,
    pub parent: PathBuf,
    pub no_prompt: bool,
    pub json: bool,
}

/// Execute the new-project command and return the process exit code.
///
/// # Exit codes
///
/// - `0`: project files written (tool failures only warn)
/// - `1`: invalid project name, or the directory/a file could not be written
///
/// # Errors
///
/// Returns an error only if console output itself fails.
pub fn execute(args: NewArgs) -> Result<i32> {
    internal::execute_new(args, &mut internal::prompt::Terminal)
}
