use crate::errors::DeckError;

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("No supported terminal backend found (tried: tmux)")]
    NoBackendFound,

    #[error("Terminal backend '{backend}' is not supported (expected: tmux, dry-run)")]
    UnknownBackend { backend: String },

    #[error("Failed to spawn terminal process: {message}")]
    SpawnFailed { message: String },

    #[error("Terminal has no shell to run")]
    MissingShell,

    #[error("tmux {command} failed: {stderr}")]
    TmuxFailed { command: String, stderr: String },
}

impl DeckError for TerminalError {
    fn error_code(&self) -> &'static str {
        match self {
            TerminalError::NoBackendFound => "NO_BACKEND_FOUND",
            TerminalError::UnknownBackend { .. } => "UNKNOWN_BACKEND",
            TerminalError::SpawnFailed { .. } => "TERMINAL_SPAWN_FAILED",
            TerminalError::MissingShell => "MISSING_SHELL",
            TerminalError::TmuxFailed { .. } => "TMUX_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            TerminalError::NoBackendFound
                | TerminalError::UnknownBackend { .. }
                | TerminalError::MissingShell
                | TerminalError::TmuxFailed { .. }
        )
    }
}
