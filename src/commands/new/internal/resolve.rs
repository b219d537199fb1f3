//! Turn flags and prompt answers into a validated ProjectSpec

use anyhow::Result;

use seedling::project::ProjectName;
use seedling::{Options, Platform, ProjectSpec, ScaffoldError};

use super::prompt::{confirm, Prompt};
use crate::commands::new::NewArgs;

/// Resolve the run's input.
///
/// With a name on the command line, flags are taken as-is. Without one, the
/// name is prompted for (if stdin is interactive and `--yes` was not given),
/// and so is every option whose flag was not passed.
pub fn resolve(args: &NewArgs, prompt: &mut dyn Prompt) -> Result<ProjectSpec> {
    let (raw_name, prompted) = match &args.name {
        Some(name) => (name.clone(), false),
        None if !args.no_prompt && prompt.is_interactive() => {
            (prompt.ask("Enter project name: ")?, true)
        }
        None => {
            return Err(ScaffoldError::InvalidInput(
                "Project name is required (pass NAME or run interactively)".to_string(),
            )
            .into())
        }
    };

    // Reject a bad name before asking anything else
    let name = ProjectName::parse(&raw_name)?;

    let mut options = Options {
        provision_environment: !args.no_venv,
        init_repository: args.init_git,
    };
    if prompted {
        if !args.init_git {
            options.init_repository = confirm(prompt, "Initialize a Git repository?", false)?;
        }
        if !args.no_venv {
            options.provision_environment =
                confirm(prompt, "Create a virtual environment?", true)?;
        }
    }

    let platform = args.platform.unwrap_or_else(Platform::host);
    Ok(ProjectSpec::new(name.as_str(), platform, options)?)
}
