//! Console reporting for the new-project command

use anyhow::Result;
use colored::Colorize;
use std::fmt::Display;

use seedling::materialize::{FileOutcome, FileRecord};
use seedling::{GenerationResult, ProjectSpec, ScaffoldError, StageOutcome};

pub fn print_summary(spec: &ProjectSpec, result: &GenerationResult) {
    println!("\n{}", headline(spec, result));

    if result.preexisting() {
        println!(
            "  {} {} already existed; generated files replaced any with the same name",
            "⚠️ ".yellow(),
            result.created_path.display()
        );
    }

    for line in [
        stage_line("Virtual environment", &result.provision),
        stage_line("Git repository", &result.repo_init),
    ]
    .into_iter()
    .flatten()
    {
        println!("{line}");
    }

    println!("\n{}", "🔵 All set! Start coding now.".bold());
    println!("🔴 Project folder: {}", result.created_path.display());
    println!("\nNext steps:");
    println!("  1. cd {}", spec.name());
    println!("  2. {}", spec.platform().setup_command());
}

pub fn print_json(result: &GenerationResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

pub fn print_fatal(err: &dyn Display) {
    eprintln!("{} {}", "❌".red(), err);
}

/// Report a fatal generation error along with the files handled before it.
pub fn print_failure(err: &ScaffoldError, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&failure_json(err))?);
        return Ok(());
    }

    print_fatal(err);
    let files = err.files();
    for record in files {
        eprintln!("{}", file_line(record));
    }
    if files.iter().any(|r| r.outcome == FileOutcome::Written) {
        eprintln!("   Files written before the failure were left in place.");
    }
    Ok(())
}

fn failure_json(err: &ScaffoldError) -> serde_json::Value {
    serde_json::json!({
        "error": err.to_string(),
        "files": err.files(),
    })
}

fn headline(spec: &ProjectSpec, result: &GenerationResult) -> String {
    if result.is_complete() {
        format!("{} Project '{}' created successfully.", "✅".green(), spec.name())
    } else {
        format!(
            "{} Project '{}' created with warnings.",
            "⚠️ ".yellow(),
            spec.name()
        )
    }
}

fn file_line(record: &FileRecord) -> String {
    match &record.outcome {
        FileOutcome::Written => format!("  {} {}", "✓".green().bold(), record.path),
        FileOutcome::Failed { reason } => {
            format!("  {} {}: {reason}", "✗".red().bold(), record.path)
        }
    }
}

/// One summary line per requested stage
fn stage_line(label: &str, outcome: &StageOutcome) -> Option<String> {
    match outcome {
        StageOutcome::NotRequested => None,
        StageOutcome::Success => Some(format!("  {} {label} ready", "✓".green().bold())),
        StageOutcome::Failure { reason } => Some(format!(
            "  {} {label} skipped: {reason}",
            "✗".red().bold()
        )),
    }
}
