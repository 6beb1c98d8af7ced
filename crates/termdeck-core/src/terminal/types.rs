use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Where a new terminal is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TerminalLocation {
    /// The default terminal group.
    Panel,
    /// A terminal of its own, alongside editors.
    Editor,
    /// Split next to the given 1-based column.
    Split { column: u32 },
}

/// A theme color key such as `terminal.ansiBlue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ThemeColor(&'static str);

/// Options handed to a backend to create one terminal.
///
/// Produced by [`crate::terminal::map_terminal`]. `icon` is always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell_args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ThemeColor>,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub location: TerminalLocation,
}

/// Reference to a terminal a backend created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalHandle {
    /// Backend-specific identifier (a tmux pane id like `%12`).
    pub id: String,
    pub location: TerminalLocation,
}

impl ThemeColor {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub fn key(&self) -> &'static str {
        self.0
    }

    /// The bare ANSI color name, e.g. `blue` for `terminal.ansiBlue`.
    pub fn ansi_name(&self) -> String {
        self.0
            .strip_prefix("terminal.ansi")
            .unwrap_or(self.0)
            .to_ascii_lowercase()
    }
}

impl TerminalOptions {
    /// The shell executable, if one is configured and non-empty.
    pub fn launchable_shell(&self) -> Option<&str> {
        self.shell_path.as_deref().filter(|path| !path.is_empty())
    }

    /// The working directory, ignoring an empty path.
    pub fn working_directory(&self) -> Option<&std::path::Path> {
        self.cwd
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

impl TerminalHandle {
    pub fn new(id: impl Into<String>, location: TerminalLocation) -> Self {
        Self {
            id: id.into(),
            location,
        }
    }
}

impl std::fmt::Display for TerminalLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalLocation::Panel => write!(f, "panel"),
            TerminalLocation::Editor => write!(f, "editor"),
            TerminalLocation::Split { column } => write!(f, "split:{}", column),
        }
    }
}

impl std::fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
