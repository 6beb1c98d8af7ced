//! Process-level helpers for driving tmux.

use std::process::Command;

use tracing::{debug, warn};

use crate::terminal::errors::TerminalError;

/// Run `tmux` with the given arguments and return its trimmed stdout.
pub fn run_tmux(args: &[String]) -> Result<String, TerminalError> {
    let subcommand = args.first().cloned().unwrap_or_default();

    debug!(
        event = "core.terminal.tmux_started",
        subcommand = %subcommand,
        arg_count = args.len()
    );

    let output = Command::new("tmux")
        .args(args)
        .output()
        .map_err(|e| TerminalError::SpawnFailed {
            message: format!("failed to run tmux: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(
            event = "core.terminal.tmux_failed",
            subcommand = %subcommand,
            exit_code = ?output.status.code(),
            stderr = %stderr
        );
        return Err(TerminalError::TmuxFailed {
            command: subcommand,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Whether the current process runs inside a tmux client.
pub fn inside_tmux() -> bool {
    std::env::var_os("TMUX").is_some_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tmux_reports_failure_without_panicking() {
        // Either tmux is missing (SpawnFailed) or the bogus subcommand fails.
        let result = run_tmux(&["definitely-not-a-tmux-command".to_string()]);
        assert!(result.is_err());
    }
}
