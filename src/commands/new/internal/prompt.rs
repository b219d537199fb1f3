//! User interaction for the new-project command

use anyhow::{Context, Result};
use std::io::{self, Write};

/// Source of answers for interactive questions
pub trait Prompt {
    /// Whether questions can be asked at all
    fn is_interactive(&self) -> bool;

    /// Ask a question and return the raw answer line
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Stdin/stdout prompt
pub struct Terminal;

impl Prompt for Terminal {
    fn is_interactive(&self) -> bool {
        atty::is(atty::Stream::Stdin)
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        print!("{question}");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer from stdin")?;
        Ok(input)
    }
}

/// Yes/no question. An empty answer takes the default.
pub fn confirm(prompt: &mut dyn Prompt, question: &str, default: bool) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    let answer = prompt.ask(&format!("{question} {hint}: "))?;

    let trimmed = answer.trim().to_lowercase();
    Ok(match trimmed.as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    })
}

/// Canned answers for tests
#[cfg(test)]
pub struct Scripted {
    interactive: bool,
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl Scripted {
    /// Non-interactive: every question is an error
    pub fn closed() -> Self {
        Self {
            interactive: false,
            answers: Default::default(),
            asked: Vec::new(),
        }
    }

    pub fn answering<const N: usize>(answers: [&str; N]) -> Self {
        Self {
            interactive: true,
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompt for Scripted {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected question: {question}"))
    }
}
