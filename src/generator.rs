//! Stage sequencing for one generation run
//!
//! Strictly sequential: materialize → provision → git init. Only the
//! materialize stage can fail the run; the other two record an outcome and
//! the run moves on. Nothing is rolled back.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{log_debug, Config};
use crate::error::ScaffoldError;
use crate::materialize::{self, FileRecord, RootState};
use crate::process::StageOutcome;
use crate::project::ProjectSpec;
use crate::{provision, repo, templates};

/// Everything that happened during a run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub created_path: PathBuf,
    pub root_state: RootState,
    pub files: Vec<FileRecord>,
    pub provision: StageOutcome,
    pub repo_init: StageOutcome,
}

impl GenerationResult {
    /// True when every requested stage succeeded
    pub fn is_complete(&self) -> bool {
        !self.provision.is_failure() && !self.repo_init.is_failure()
    }

    /// The root already held files before this run
    pub fn preexisting(&self) -> bool {
        self.root_state == RootState::ExistingNonEmpty
    }
}

pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate `spec` as a new directory under `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Io`] if the root or any file cannot be
    /// written. Tool failures never produce an error.
    pub fn generate(
        &self,
        spec: &ProjectSpec,
        parent: &Path,
    ) -> Result<GenerationResult, ScaffoldError> {
        let root = project_root(parent, spec)?;
        let options = spec.options();

        self.step(&format!("📁 Creating project '{}'...", spec.name()));
        let files = templates::produce(spec);
        let mut records = Vec::with_capacity(files.len());
        let root_state = materialize::materialize(&root, &files, &mut records)?;
        if root_state == RootState::ExistingNonEmpty {
            log_debug(
                "generator",
                &format!("{} was not empty; existing files may be overwritten", root.display()),
            );
        }

        let provision = if options.provision_environment {
            self.step("🔧 Creating virtual environment...");
            provision::provision(&root, &self.config.interpreter())
        } else {
            StageOutcome::NotRequested
        };

        let repo_init = if options.init_repository {
            self.step("🔧 Initializing Git repository...");
            repo::init_repo(&root, &self.config.git)
        } else {
            StageOutcome::NotRequested
        };

        Ok(GenerationResult {
            created_path: root,
            root_state,
            files: records,
            provision,
            repo_init,
        })
    }

    fn step(&self, msg: &str) {
        if !self.config.quiet {
            println!("{msg}");
        }
    }
}

fn project_root(parent: &Path, spec: &ProjectSpec) -> Result<PathBuf, ScaffoldError> {
    let root = parent.join(spec.name().as_str());
    std::path::absolute(&root).map_err(|e| ScaffoldError::io(root, e))
}
