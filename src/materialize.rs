//! Filesystem materializer
//!
//! Creates the project root and writes catalog entries in order. The first
//! failed write stops the run; files already written stay on disk.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::log_debug;
use crate::error::ScaffoldError;
use crate::templates::TemplateFile;

/// What was at the project root before this run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootState {
    Created,
    ExistingEmpty,
    ExistingNonEmpty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Written,
    Failed { reason: String },
}

/// Outcome for one catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Create `root` (and missing parents). An existing directory is fine.
pub fn prepare_root(root: &Path) -> Result<RootState, ScaffoldError> {
    let state = if root.is_dir() {
        let mut entries = fs::read_dir(root).map_err(|e| ScaffoldError::io(root, e))?;
        if entries.next().is_some() {
            RootState::ExistingNonEmpty
        } else {
            RootState::ExistingEmpty
        }
    } else {
        RootState::Created
    };

    fs::create_dir_all(root).map_err(|e| ScaffoldError::io(root, e))?;
    log_debug(
        "materialize",
        &format!("project root {} ({state:?})", root.display()),
    );
    Ok(state)
}

/// Write every file under `root`, appending one record per attempt.
///
/// Existing files are overwritten. Stops at the first failure.
pub fn write_files(
    root: &Path,
    files: &[TemplateFile],
    records: &mut Vec<FileRecord>,
) -> Result<(), ScaffoldError> {
    for file in files {
        let path = root.join(&file.relative_path);
        match write_one(&path, file) {
            Ok(()) => records.push(FileRecord {
                path: file.relative_path.clone(),
                outcome: FileOutcome::Written,
            }),
            Err(e) => {
                records.push(FileRecord {
                    path: file.relative_path.clone(),
                    outcome: FileOutcome::Failed {
                        reason: e.to_string(),
                    },
                });
                return Err(ScaffoldError::io(path, e).with_files(records.clone()));
            }
        }
    }
    Ok(())
}

/// Prepare the root and write the catalog into it.
pub fn materialize(
    root: &Path,
    files: &[TemplateFile],
    records: &mut Vec<FileRecord>,
) -> Result<RootState, ScaffoldError> {
    let state = prepare_root(root)?;
    write_files(root, files, records)?;
    Ok(state)
}

fn write_one(path: &Path, file: &TemplateFile) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &file.content)?;
    if file.executable {
        set_executable(path)?;
    }
    log_debug("materialize", &format!("wrote {}", path.display()));
    Ok(())
}

#[cfg(unix)]
fn set_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file(path: &str, content: &str, executable: bool) -> TemplateFile {
        TemplateFile {
            relative_path: path.to_string(),
            content: content.to_string(),
            executable,
        }
    }

    #[test]
    fn creates_missing_root_with_parents() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("a").join("b").join("demo");

        let mut records = Vec::new();
        let state = materialize(&root, &[file("main.py", "x", false)], &mut records).unwrap();

        assert_eq!(state, RootState::Created);
        assert_eq!(fs::read_to_string(root.join("main.py")).unwrap(), "x");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].outcome, FileOutcome::Written);
    }

    #[test]
    fn reports_existing_root_state() {
        let temp = TempDir::new().unwrap();
        assert_eq!(prepare_root(temp.path()).unwrap(), RootState::ExistingEmpty);

        fs::write(temp.path().join("notes.txt"), "keep").unwrap();
        assert_eq!(
            prepare_root(temp.path()).unwrap(),
            RootState::ExistingNonEmpty
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("notes.txt")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn overwrites_existing_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "old").unwrap();

        let mut records = Vec::new();
        write_files(temp.path(), &[file("README.md", "new", false)], &mut records).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("README.md")).unwrap(),
            "new"
        );
    }

    #[test]
    fn creates_intermediate_directories() {
        let temp = TempDir::new().unwrap();
        let mut records = Vec::new();
        write_files(
            temp.path(),
            &[file("pkg/sub/__init__.py", "", false)],
            &mut records,
        )
        .unwrap();
        assert!(temp.path().join("pkg/sub/__init__.py").is_file());
    }

    #[test]
    fn first_failure_stops_and_keeps_prior_writes() {
        let temp = TempDir::new().unwrap();
        // A directory where a file should go makes the write fail
        fs::create_dir(temp.path().join("blocked")).unwrap();

        let files = [
            file("first.txt", "1", false),
            file("blocked", "2", false),
            file("third.txt", "3", false),
        ];
        let mut records = Vec::new();
        let err = write_files(temp.path(), &files, &mut records).unwrap_err();

        match err {
            ScaffoldError::Io { path, files, .. } => {
                assert_eq!(path, temp.path().join("blocked"));
                assert_eq!(files, records);
            }
            other => panic!("expected io error, got {other:?}"),
        }
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].outcome, FileOutcome::Written);
        assert!(matches!(records[1].outcome, FileOutcome::Failed { .. }));
        assert!(temp.path().join("first.txt").exists());
        assert!(!temp.path().join("third.txt").exists());
    }

    #[test]
    fn root_under_a_file_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("taken");
        fs::write(&blocker, "file").unwrap();

        let mut records = Vec::new();
        let err = materialize(&blocker.join("demo"), &[], &mut records).unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
        assert!(records.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn executable_bit_follows_the_flag() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let mut records = Vec::new();
        write_files(
            temp.path(),
            &[file("setup.sh", "#!/bin/sh\n", true), file("main.py", "", false)],
            &mut records,
        )
        .unwrap();

        let mode = |name: &str| fs::metadata(temp.path().join(name)).unwrap().permissions().mode();
        assert_ne!(mode("setup.sh") & 0o111, 0);
        assert_eq!(mode("main.py") & 0o111, 0);
    }
}
