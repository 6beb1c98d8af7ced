//! Backend lookup by name and auto-detection.

use tracing::{debug, warn};

use crate::terminal::backends::{DryRunBackend, TmuxBackend};
use crate::terminal::errors::TerminalError;
use crate::terminal::traits::TerminalBackend;

/// Names accepted by [`get_backend`].
pub const VALID_BACKENDS: [&str; 2] = ["tmux", "dry-run"];

/// Look up a backend by its short name.
pub fn get_backend(name: &str) -> Result<Box<dyn TerminalBackend>, TerminalError> {
    match name.to_ascii_lowercase().as_str() {
        "tmux" => Ok(Box::new(TmuxBackend::new())),
        "dry-run" | "dryrun" => Ok(Box::new(DryRunBackend::new())),
        _ => {
            warn!(event = "core.terminal.unknown_backend", backend = name);
            Err(TerminalError::UnknownBackend {
                backend: name.to_string(),
            })
        }
    }
}

/// Pick the first backend available on this machine.
pub fn detect_backend() -> Result<Box<dyn TerminalBackend>, TerminalError> {
    let tmux = TmuxBackend::new();
    if tmux.is_available() {
        debug!(event = "core.terminal.detect_completed", backend = tmux.name());
        return Ok(Box::new(tmux));
    }

    warn!(event = "core.terminal.detect_failed", tried = "tmux");
    Err(TerminalError::NoBackendFound)
}
