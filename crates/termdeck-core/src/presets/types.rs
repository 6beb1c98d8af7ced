use std::path::PathBuf;

use crate::terminal::TerminalHandle;

/// What happened to one terminal of a launched preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalOutcome {
    Launched {
        name: String,
        handle: TerminalHandle,
        command_sent: bool,
    },
    /// The working directory did not exist; reported to the user.
    InvalidWorkingDir { name: String, cwd: PathBuf },
    /// No shell configured; skipped without a message.
    NoShell { name: String },
    /// The backend refused; reported to the user.
    Failed { name: String, error: String },
}

/// Per-terminal results of launching a preset, in terminal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub preset: String,
    pub outcomes: Vec<TerminalOutcome>,
}

impl TerminalOutcome {
    pub fn name(&self) -> &str {
        match self {
            TerminalOutcome::Launched { name, .. }
            | TerminalOutcome::InvalidWorkingDir { name, .. }
            | TerminalOutcome::NoShell { name }
            | TerminalOutcome::Failed { name, .. } => name,
        }
    }
}

impl LaunchReport {
    pub fn launched_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TerminalOutcome::Launched { .. }))
            .count()
    }

    /// Terminals not attempted: bad working directory or no shell.
    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(
                    o,
                    TerminalOutcome::InvalidWorkingDir { .. } | TerminalOutcome::NoShell { .. }
                )
            })
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TerminalOutcome::Failed { .. }))
            .count()
    }
}
