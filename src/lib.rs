//! Seedling: a lightweight Python project skeleton generator.
//!
//! A run turns a [`ProjectSpec`] into a directory of template files, then
//! optionally creates a virtual environment and a git repository inside it.

pub mod config;
pub mod error;
pub mod generator;
pub mod materialize;
pub mod process;
pub mod project;
pub mod provision;
pub mod repo;
pub mod templates;

// Re-export commonly used types
pub use config::Config;
pub use error::{ScaffoldError, StageError};
pub use generator::{GenerationResult, Generator};
pub use process::StageOutcome;
pub use project::{Options, Platform, ProjectSpec};
