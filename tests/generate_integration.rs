//! End-to-end generation against a temporary directory
//!
//! Run with: cargo test --test generate_integration -- --nocapture

use std::fs;
use tempfile::TempDir;

use seedling::materialize::RootState;
use seedling::templates;
use seedling::{Config, Generator, Options, Platform, ProjectSpec, StageOutcome};

const MISSING_PYTHON: &str = "seedling-test-no-such-python";
const MISSING_GIT: &str = "seedling-test-no-such-git";

fn config(python: &str, git: &str) -> Config {
    Config {
        python: Some(python.to_string()),
        git: git.to_string(),
        quiet: true,
    }
}

fn spec(name: &str, platform: Platform, provision: bool, git: bool) -> ProjectSpec {
    ProjectSpec::new(
        name,
        platform,
        Options {
            provision_environment: provision,
            init_repository: git,
        },
    )
    .expect("valid name")
}

#[test]
fn written_files_match_the_catalog_byte_for_byte() {
    let temp = TempDir::new().unwrap();
    let spec = spec("demo", Platform::Posix, false, false);

    let result = Generator::new(config(MISSING_PYTHON, MISSING_GIT))
        .generate(&spec, temp.path())
        .unwrap();

    let root = temp.path().join("demo");
    let catalog = templates::produce(&spec);
    let mut on_disk: Vec<_> = fs::read_dir(&root)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    on_disk.sort();
    let mut expected: Vec<_> = catalog.iter().map(|f| f.relative_path.clone()).collect();
    expected.sort();
    assert_eq!(on_disk, expected);

    for file in &catalog {
        let written = fs::read(root.join(&file.relative_path)).unwrap();
        assert_eq!(written, file.content.as_bytes(), "{}", file.relative_path);
    }
    assert_eq!(result.root_state, RootState::Created);
    assert_eq!(result.files.len(), catalog.len());
}

#[cfg(unix)]
#[test]
fn only_posix_runs_get_an_executable_script() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let generator = Generator::new(config(MISSING_PYTHON, MISSING_GIT));
    generator
        .generate(&spec("posix", Platform::Posix, false, false), temp.path())
        .unwrap();
    generator
        .generate(&spec("windows", Platform::Windows, false, false), temp.path())
        .unwrap();

    let mode = |rel: &str| {
        fs::metadata(temp.path().join(rel))
            .unwrap()
            .permissions()
            .mode()
    };
    assert_ne!(mode("posix/setup.sh") & 0o111, 0);
    assert_eq!(mode("windows/setup.bat") & 0o111, 0);
    assert!(!temp.path().join("posix/setup.bat").exists());
    assert!(!temp.path().join("windows/setup.sh").exists());
}

// Silent overwrite of a non-empty directory is current behavior, not a
// settled requirement. The result flags it so callers can decide.
#[test]
fn existing_directory_is_overwritten_and_flagged() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("README.md"), "stale").unwrap();
    fs::write(root.join("notes.txt"), "mine").unwrap();

    let result = Generator::new(config(MISSING_PYTHON, MISSING_GIT))
        .generate(&spec("demo", Platform::Posix, false, false), temp.path())
        .unwrap();

    assert!(result.preexisting());
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.starts_with("# demo"));
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "mine");
}

#[test]
fn missing_tools_still_complete_the_run() {
    let temp = TempDir::new().unwrap();

    let result = Generator::new(config(MISSING_PYTHON, MISSING_GIT))
        .generate(&spec("demo", Platform::Posix, true, true), temp.path())
        .unwrap();

    let root = temp.path().join("demo");
    assert!(result.provision.is_failure());
    assert!(result.repo_init.is_failure());
    assert!(root.join("main.py").is_file());
    assert!(!root.join("venv").exists());
    assert!(!root.join(".git").exists());
}

#[test]
fn missing_git_still_provisions_and_writes_files() {
    let python = Config::default().interpreter();
    if which::which(&python).is_err() {
        return;
    }
    let temp = TempDir::new().unwrap();

    let result = Generator::new(config(&python, MISSING_GIT))
        .generate(&spec("demo", Platform::Posix, true, true), temp.path())
        .unwrap();

    let root = temp.path().join("demo");
    // Some distributions ship python without the venv module
    if result.provision.is_success() {
        assert!(root.join("venv").is_dir());
    }
    match &result.repo_init {
        StageOutcome::Failure { reason } => assert!(reason.contains(MISSING_GIT)),
        other => panic!("expected git failure, got {other:?}"),
    }
    assert!(!root.join(".git").exists());
    assert!(root.join("README.md").is_file());
}

#[test]
fn both_tools_present_create_env_and_repository() {
    let python = Config::default().interpreter();
    if which::which(&python).is_err() || which::which("git").is_err() {
        return;
    }
    let temp = TempDir::new().unwrap();

    let result = Generator::new(config(&python, "git"))
        .generate(&spec("demo", Platform::Posix, true, true), temp.path())
        .unwrap();

    let root = temp.path().join("demo");
    assert!(result.repo_init.is_success());
    assert!(root.join(".git").is_dir());
    if result.provision.is_success() {
        assert!(root.join("venv").is_dir());
    }
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("demo"));
}
