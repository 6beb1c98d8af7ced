//! tmux backend implementation.
//!
//! Locations map onto tmux as follows:
//! - `Panel` - a new window in the current session
//! - `Editor` - a new detached session, switched to when attached. Sessions
//!   keep tmux's generated names; the terminal name goes on the window.
//! - `Split { column }` - a horizontal split of the `column`-th window of
//!   the current session, counted from 1 whatever tmux's `base-index` is
//!
//! Every created pane is addressed by its pane id (`%N`) afterwards.

use tracing::{debug, info, warn};

use crate::terminal::common::escape::build_shell_command;
use crate::terminal::errors::TerminalError;
use crate::terminal::operations::{inside_tmux, run_tmux};
use crate::terminal::traits::TerminalBackend;
use crate::terminal::types::{TerminalHandle, TerminalLocation, TerminalOptions};

/// Format string that makes tmux print the id of the created pane.
const PANE_ID_FORMAT: &str = "#{pane_id}";

/// Format string that makes tmux print one window index per line.
const WINDOW_INDEX_FORMAT: &str = "#{window_index}";

/// User option holding the icon name of a pane.
const ICON_OPTION: &str = "@termdeck-icon";

type TmuxRunner = Box<dyn Fn(&[String]) -> Result<String, TerminalError>>;

/// Backend implementation for tmux.
pub struct TmuxBackend {
    runner: TmuxRunner,
    attached: bool,
}

impl TmuxBackend {
    pub fn new() -> Self {
        Self {
            runner: Box::new(run_tmux),
            attached: inside_tmux(),
        }
    }

    /// Backend that hands every tmux invocation to `runner` instead of
    /// spawning a process.
    pub fn with_runner(
        runner: impl Fn(&[String]) -> Result<String, TerminalError> + 'static,
        attached: bool,
    ) -> Self {
        Self {
            runner: Box::new(runner),
            attached,
        }
    }
}

impl TmuxBackend {
    /// Index of the `column`-th window (1-based) of the current session.
    ///
    /// Window indexes depend on `base-index` and may have gaps, so the
    /// column is counted over the listed windows. A column past the last
    /// window uses the last one; an empty listing leaves the target to tmux.
    fn split_window(&self, column: u32) -> Result<Option<String>, TerminalError> {
        let listing = (self.runner)(&list_windows_args())?;
        let windows = window_indexes(&listing);
        let position = usize::try_from(column).unwrap_or(usize::MAX).saturating_sub(1);
        let window = windows.get(position).or(windows.last()).cloned();

        debug!(
            event = "core.terminal.tmux_split_resolved",
            column = column,
            window = ?window,
            window_count = windows.len()
        );

        Ok(window)
    }
}

impl Default for TmuxBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend for TmuxBackend {
    fn name(&self) -> &'static str {
        "tmux"
    }

    fn display_name(&self) -> &'static str {
        "tmux"
    }

    fn is_available(&self) -> bool {
        which::which("tmux").is_ok()
    }

    fn create_terminal(&self, options: &TerminalOptions) -> Result<TerminalHandle, TerminalError> {
        let shell = options.launchable_shell().ok_or(TerminalError::MissingShell)?;
        let shell_command =
            build_shell_command(shell, options.shell_args.as_deref().unwrap_or_default());

        let split_window = match options.location {
            TerminalLocation::Split { column } => self.split_window(column)?,
            TerminalLocation::Panel | TerminalLocation::Editor => None,
        };

        let pane_id = (self.runner)(&create_args(options, &shell_command, split_window.as_deref()))?;
        if pane_id.is_empty() {
            return Err(TerminalError::SpawnFailed {
                message: "tmux did not report a pane id".to_string(),
            });
        }

        // Styling is cosmetic: a failure here must not lose the pane.
        for args in decorate_args(&pane_id, options) {
            if let Err(e) = (self.runner)(&args) {
                warn!(
                    event = "core.terminal.tmux_decorate_failed",
                    pane_id = %pane_id,
                    error = %e
                );
            }
        }

        info!(
            event = "core.terminal.tmux_pane_created",
            pane_id = %pane_id,
            location = %options.location
        );

        Ok(TerminalHandle::new(pane_id, options.location))
    }

    fn show(&self, handle: &TerminalHandle) -> Result<(), TerminalError> {
        let commands = show_args(handle, self.attached);
        if commands.is_empty() {
            debug!(
                event = "core.terminal.tmux_show_skipped",
                pane_id = %handle.id,
                reason = "not attached to a tmux client"
            );
        }
        for args in commands {
            (self.runner)(&args)?;
        }
        Ok(())
    }

    fn send_text(
        &self,
        handle: &TerminalHandle,
        text: &str,
        add_new_line: bool,
    ) -> Result<(), TerminalError> {
        for args in send_args(handle, text, add_new_line) {
            (self.runner)(&args)?;
        }
        Ok(())
    }
}

fn strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// Arguments listing the window indexes of the current session, in order.
pub fn list_windows_args() -> Vec<String> {
    strings(&["list-windows", "-F", WINDOW_INDEX_FORMAT])
}

/// Window indexes from `list-windows` output, one per line.
pub fn window_indexes(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Arguments creating the pane for `options`, printing its pane id.
///
/// `split_window` is the window index a split goes into; without one tmux
/// splits the current window.
pub fn create_args(
    options: &TerminalOptions,
    shell_command: &str,
    split_window: Option<&str>,
) -> Vec<String> {
    let mut args = match options.location {
        TerminalLocation::Panel => {
            let mut args = strings(&["new-window", "-d", "-P", "-F", PANE_ID_FORMAT]);
            if let Some(name) = options.name.as_deref().filter(|n| !n.is_empty()) {
                args.extend(strings(&["-n", name]));
            }
            args
        }
        TerminalLocation::Editor => {
            // Session names must be unique, so the name goes on its window
            let mut args = strings(&["new-session", "-d", "-P", "-F", PANE_ID_FORMAT]);
            if let Some(name) = options.name.as_deref().filter(|n| !n.is_empty()) {
                args.extend(strings(&["-n", name]));
            }
            args
        }
        TerminalLocation::Split { .. } => {
            let mut args = strings(&["split-window", "-d", "-h", "-P", "-F", PANE_ID_FORMAT]);
            if let Some(window) = split_window {
                args.push("-t".to_string());
                args.push(format!(":{}", window));
            }
            args
        }
    };

    if let Some(cwd) = options.working_directory() {
        args.push("-c".to_string());
        args.push(cwd.display().to_string());
    }

    if let Some(env) = &options.env {
        for (key, value) in env {
            args.push("-e".to_string());
            args.push(format!("{}={}", key, value));
        }
    }

    args.push(shell_command.to_string());
    args
}

/// Follow-up commands applying name, color, icon and message to a pane.
pub fn decorate_args(pane_id: &str, options: &TerminalOptions) -> Vec<Vec<String>> {
    let mut commands = Vec::new();

    // Windows and sessions are named at creation; split panes get a title.
    if let TerminalLocation::Split { .. } = options.location
        && let Some(name) = options.name.as_deref().filter(|n| !n.is_empty())
    {
        commands.push(strings(&["select-pane", "-t", pane_id, "-T", name]));
    }

    if let Some(color) = options.color {
        commands.push(vec![
            "set-option".to_string(),
            "-p".to_string(),
            "-t".to_string(),
            pane_id.to_string(),
            "window-style".to_string(),
            format!("fg={}", color.ansi_name()),
        ]);
    }

    commands.push(strings(&[
        "set-option",
        "-p",
        "-t",
        pane_id,
        ICON_OPTION,
        &options.icon,
    ]));

    if let Some(message) = &options.message {
        commands.push(strings(&["display-message", "-t", pane_id, message]));
    }

    commands
}

/// Commands bringing a pane to the foreground.
///
/// A detached session can only be switched to from an attached client.
pub fn show_args(handle: &TerminalHandle, attached: bool) -> Vec<Vec<String>> {
    match handle.location {
        TerminalLocation::Editor if attached => {
            vec![strings(&["switch-client", "-t", handle.id.as_str()])]
        }
        TerminalLocation::Editor => Vec::new(),
        TerminalLocation::Panel | TerminalLocation::Split { .. } => vec![
            strings(&["select-window", "-t", handle.id.as_str()]),
            strings(&["select-pane", "-t", handle.id.as_str()]),
        ],
    }
}

/// Commands typing `text` into a pane, literally, then pressing enter.
pub fn send_args(handle: &TerminalHandle, text: &str, add_new_line: bool) -> Vec<Vec<String>> {
    let mut commands = vec![strings(&["send-keys", "-t", handle.id.as_str(), "-l", text])];
    if add_new_line {
        commands.push(strings(&["send-keys", "-t", handle.id.as_str(), "Enter"]));
    }
    commands
}
