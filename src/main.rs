use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use seedling::Platform;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Lightweight Python project skeleton generator", long_about = None)]
struct Cli {
    /// Project name (prompted for when omitted)
    name: Option<String>,

    /// Initialize a Git repository
    #[arg(long)]
    init_git: bool,

    /// Don't create a virtual environment
    #[arg(long)]
    no_venv: bool,

    /// Platform the setup script targets (defaults to this machine)
    #[arg(long, value_enum)]
    platform: Option<PlatformArg>,

    /// Directory to create the project in
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Never prompt; a missing name is an error
    #[arg(short, long)]
    yes: bool,

    /// Output results as JSON
    #[arg(short, long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlatformArg {
    Posix,
    Windows,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Posix => Platform::Posix,
            PlatformArg::Windows => Platform::Windows,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = commands::new::NewArgs {
        name: cli.name,
        init_git: cli.init_git,
        no_venv: cli.no_venv,
        platform: cli.platform.map(Platform::from),
        parent: cli.path,
        no_prompt: cli.yes,
        json: cli.json,
    };

    let exit_code = commands::new::execute(args)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
