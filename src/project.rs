//! Project parameters for a single generation run
//!
//! A [`ProjectSpec`] is built once, validated on construction, and never
//! mutated afterwards. Every other component takes it by reference.

use serde::Serialize;
use std::fmt;

use crate::error::ScaffoldError;

/// Characters that are rejected in a project name on any platform.
const FORBIDDEN_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Device names Windows reserves, with or without an extension.
/// Rejected everywhere so a project stays portable.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Platform the generated setup script targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// Platform seedling itself is running on
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// File name of the setup/activation script for this platform
    pub fn setup_script(self) -> &'static str {
        match self {
            Platform::Posix => "setup.sh",
            Platform::Windows => "setup.bat",
        }
    }

    /// How the README tells the user to run the setup script
    pub fn setup_command(self) -> &'static str {
        match self {
            Platform::Posix => "./setup.sh",
            Platform::Windows => "setup.bat",
        }
    }

    /// Whether the setup script needs the executable bit
    pub fn script_is_executable(self) -> bool {
        matches!(self, Platform::Posix)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Posix => "posix",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional stages of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Options {
    pub provision_environment: bool,
    pub init_repository: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            provision_environment: true,
            init_repository: false,
        }
    }
}

/// A validated, filesystem-safe project name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate a raw name. Surrounding whitespace is trimmed first.
    pub fn parse(raw: &str) -> Result<Self, ScaffoldError> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(ScaffoldError::InvalidInput(
                "Project name cannot be empty".to_string(),
            ));
        }
        if name == "." || name == ".." {
            return Err(ScaffoldError::InvalidInput(format!(
                "'{name}' is not a directory name"
            )));
        }
        if name.ends_with('.') {
            return Err(ScaffoldError::InvalidInput(format!(
                "'{name}' cannot end with '.'"
            )));
        }
        if is_reserved(name) {
            return Err(ScaffoldError::InvalidInput(format!(
                "'{name}' is a reserved device name on Windows"
            )));
        }
        if let Some(c) = name
            .chars()
            .find(|c| c.is_control() || FORBIDDEN_CHARS.contains(c))
        {
            return Err(ScaffoldError::InvalidInput(format!(
                "'{name}' contains forbidden character {c:?}"
            )));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_reserved(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or(name).trim_end();
    RESERVED_NAMES
        .iter()
        .any(|reserved| stem.eq_ignore_ascii_case(reserved))
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a run needs to know about the project to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    name: ProjectName,
    platform: Platform,
    options: Options,
}

impl ProjectSpec {
    pub fn new(name: &str, platform: Platform, options: Options) -> Result<Self, ScaffoldError> {
        Ok(Self {
            name: ProjectName::parse(name)?,
            platform,
            options,
        })
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn options(&self) -> Options {
        self.options
    }
}
