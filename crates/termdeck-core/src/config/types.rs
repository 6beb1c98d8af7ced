//! Configuration type definitions for termdeck.
//!
//! These types are deserialized from the presets file, either TOML or JSON.
//! Nothing here is mutated after parse.
//!
//! # Example Configuration
//!
//! ```toml
//! [[presets]]
//! name = "Dev"
//!
//! [[presets.terminals]]
//! name = "server"
//! shellPath = "/bin/bash"
//! cwd = "/home/me/src/app"
//! color = "blue"
//! command = "npm run dev"
//!
//! [[presets.terminals]]
//! name = "logs"
//! shellPath = "/bin/zsh"
//! location = "split:1"
//! env = { RUST_LOG = "debug" }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level parsed presets file.
///
/// Presets keep file order. Names need not be unique, but selection by name
/// always picks the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub presets: Vec<Preset>,
}

/// A named group of terminals launched together, in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,

    /// Launching a preset with no terminals is a no-op.
    #[serde(default)]
    pub terminals: Vec<Terminal>,
}

/// Declarative definition of one terminal session.
///
/// Every field is optional. A terminal without a non-empty `shell_path` is
/// never created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Terminal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Must exist at launch time, otherwise the terminal is skipped and reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    #[serde(default, alias = "shell_path", skip_serializing_if = "Option::is_none")]
    pub shell_path: Option<String>,

    #[serde(default, alias = "shell_args", skip_serializing_if = "Option::is_none")]
    pub shell_args: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<TerminalColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Banner text shown in the terminal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// `panel`, `editor` or `split:<column>`, case-insensitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Initial command line, executed once the terminal exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// The eight ANSI colors a terminal tab can be tinted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalColor {
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

impl Terminal {
    /// Name used in user-facing messages.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "unnamed",
        }
    }
}

impl Config {
    /// First preset whose name equals `name` exactly.
    pub fn find_preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Preset names in file order.
    pub fn preset_names(&self) -> Vec<String> {
        self.presets.iter().map(|p| p.name.clone()).collect()
    }
}

impl std::fmt::Display for TerminalColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TerminalColor::Black => "black",
            TerminalColor::Blue => "blue",
            TerminalColor::Cyan => "cyan",
            TerminalColor::Green => "green",
            TerminalColor::Magenta => "magenta",
            TerminalColor::Red => "red",
            TerminalColor::White => "white",
            TerminalColor::Yellow => "yellow",
        };
        write!(f, "{}", name)
    }
}
