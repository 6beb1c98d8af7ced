//! Serializable shapes for `--json` output.

use serde::Serialize;
use termdeck_core::TerminalOptions;

/// One registered command, as printed by `list --json`.
#[derive(Debug, Serialize)]
pub struct CommandEntry {
    pub id: String,
    pub kind: CommandKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminals: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    Interactive,
    Preset,
}

/// A preset as `show --json` prints it.
#[derive(Debug, Serialize)]
pub struct PresetPreview {
    pub id: String,
    pub preset: String,
    pub terminals: Vec<TerminalPreview>,
}

#[derive(Debug, Serialize)]
pub struct TerminalPreview {
    pub options: TerminalOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub status: TerminalStatus,
}

/// Whether a terminal would be created if the preset were launched now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalStatus {
    Ready,
    MissingCwd,
    NoShell,
}

impl TerminalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TerminalStatus::Ready => "ready",
            TerminalStatus::MissingCwd => "missing cwd",
            TerminalStatus::NoShell => "no shell",
        }
    }
}
