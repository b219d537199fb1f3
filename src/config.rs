//! Runtime configuration
//!
//! Seedling reads no configuration file. The few knobs it has come from
//! environment variables, read once per run:
//!
//! - `SEEDLING_PYTHON`: interpreter used to create the virtual environment
//! - `SEEDLING_GIT`: version-control binary used for `init`
//! - `SEEDLING_LOG`: enables debug logging on stderr

/// Interpreter override for environment provisioning.
pub const PYTHON_ENV_VAR: &str = "SEEDLING_PYTHON";

/// Version-control binary override.
pub const GIT_ENV_VAR: &str = "SEEDLING_GIT";

/// Debug logging switch.
pub const LOG_ENV_VAR: &str = "SEEDLING_LOG";

const DEFAULT_GIT: &str = "git";

#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit interpreter; `None` means search PATH
    pub python: Option<String>,
    /// Version-control binary name or path
    pub git: String,
    /// Suppress progress lines (JSON output mode)
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            python: None,
            git: DEFAULT_GIT.to_string(),
            quiet: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            python: non_empty_var(PYTHON_ENV_VAR),
            git: non_empty_var(GIT_ENV_VAR).unwrap_or_else(|| DEFAULT_GIT.to_string()),
            quiet: false,
        }
    }

    /// Interpreter to provision with.
    ///
    /// Falls back to the first candidate found on PATH. If none is found the
    /// first candidate is returned anyway so the failure is reported by name.
    pub fn interpreter(&self) -> String {
        if let Some(python) = &self.python {
            return python.clone();
        }

        let candidates = interpreter_candidates();
        candidates
            .iter()
            .find(|name| which::which(name).is_ok())
            .unwrap_or(&candidates[0])
            .to_string()
    }
}

fn interpreter_candidates() -> &'static [&'static str] {
    if cfg!(windows) {
        &["python", "py", "python3"]
    } else {
        &["python3", "python"]
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Debug logging, enabled by `SEEDLING_LOG`
pub fn log_debug(scope: &str, msg: &str) {
    if std::env::var(LOG_ENV_VAR).is_ok() {
        eprintln!("[DEBUG seedling::{scope}] {msg}");
    }
}
