//! Terminal backend trait.

use crate::terminal::errors::TerminalError;
use crate::terminal::types::{TerminalHandle, TerminalOptions};

/// A place terminals can be created in.
///
/// Calls are issued in sequence for a single terminal: create, show, then
/// optionally send the initial command.
pub trait TerminalBackend {
    /// Short identifier used in config and on the command line.
    fn name(&self) -> &'static str;

    /// Human-readable name for messages.
    fn display_name(&self) -> &'static str;

    /// Whether the backend can be used on this machine.
    fn is_available(&self) -> bool;

    /// Create a terminal with the given options.
    fn create_terminal(&self, options: &TerminalOptions) -> Result<TerminalHandle, TerminalError>;

    /// Bring a created terminal to the foreground.
    fn show(&self, handle: &TerminalHandle) -> Result<(), TerminalError>;

    /// Type `text` into the terminal, pressing enter when `add_new_line` is set.
    fn send_text(
        &self,
        handle: &TerminalHandle,
        text: &str,
        add_new_line: bool,
    ) -> Result<(), TerminalError>;
}
