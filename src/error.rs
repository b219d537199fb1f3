//! Error taxonomy for a generation run
//!
//! Two families:
//! - [`ScaffoldError`]: fatal. Invalid input or a filesystem failure while
//!   materializing the project. Propagates to the top level and sets exit code 1.
//! - [`StageError`]: non-fatal. An external tool is missing or exited non-zero.
//!   Always caught by the stage that raised it and reported as a warning.

use std::io;
use std::path::PathBuf;

use crate::materialize::FileRecord;

/// Exit code for any fatal error
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Invalid project name: {0}")]
    InvalidInput(String),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
        /// Catalog entries attempted before the abort, the failed one last
        files: Vec<FileRecord>,
    },
}

impl ScaffoldError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            files: Vec::new(),
        }
    }

    /// Attach the per-file outcomes recorded before the abort.
    pub fn with_files(mut self, records: Vec<FileRecord>) -> Self {
        if let Self::Io { files, .. } = &mut self {
            *files = records;
        }
        self
    }

    /// Per-file outcomes known at the time of failure
    pub fn files(&self) -> &[FileRecord] {
        match self {
            Self::Io { files, .. } => files.as_slice(),
            Self::InvalidInput(_) => &[],
        }
    }

    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("{tool} is not installed or not in PATH")]
    ToolUnavailable { tool: String },

    #[error("Failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with {status}{}", stderr_suffix(.stderr))]
    ProcessFailed {
        tool: String,
        status: String,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
