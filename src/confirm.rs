//! Download confirmation prompt.

use console::Term;
use tracing::debug;

/// Asks whether the resolved plan should be downloaded.
pub trait Confirm: Send + Sync {
    /// Return `true` to proceed. `auto_confirm` bypasses the question.
    fn confirm(&self, auto_confirm: bool) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(bool) -> bool + Send + Sync,
{
    fn confirm(&self, auto_confirm: bool) -> bool {
        self(auto_confirm)
    }
}

/// Interactive y/N question on the terminal.
#[derive(Debug, Clone)]
pub struct TermPrompt {
    term: Term,
    question: String,
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new("Download these mods?")
    }
}

impl TermPrompt {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            term: Term::stderr(),
            question: question.into(),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl Confirm for TermPrompt {
    fn confirm(&self, auto_confirm: bool) -> bool {
        if auto_confirm {
            return true;
        }
        if self.term.write_str(&format!("{} [y/N] ", self.question)).is_err() {
            return false;
        }
        match self.term.read_line() {
            Ok(answer) => is_yes(&answer),
            Err(e) => {
                debug!("Cannot read confirmation: {}", e);
                false
            }
        }
    }
}
