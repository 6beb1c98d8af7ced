//! Backend that describes what would be launched instead of launching it.

use std::cell::{Cell, RefCell};

use crate::terminal::errors::TerminalError;
use crate::terminal::traits::TerminalBackend;
use crate::terminal::types::{TerminalHandle, TerminalOptions};

/// Prints one line per backend call and creates nothing.
///
/// Lines look like `create dry-run-1 {"icon":"terminal",...}`,
/// `show dry-run-1` and `send dry-run-1 "npm run dev" enter`.
pub struct DryRunBackend {
    echo: bool,
    next_id: Cell<u32>,
    lines: RefCell<Vec<String>>,
}

impl DryRunBackend {
    /// Backend printing to stdout.
    pub fn new() -> Self {
        Self {
            echo: true,
            next_id: Cell::new(1),
            lines: RefCell::new(Vec::new()),
        }
    }

    /// Backend that only records its lines.
    pub fn silent() -> Self {
        Self {
            echo: false,
            ..Self::new()
        }
    }

    /// Every line produced so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    fn emit(&self, line: String) {
        if self.echo {
            println!("{}", line);
        }
        self.lines.borrow_mut().push(line);
    }
}

impl Default for DryRunBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend for DryRunBackend {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn display_name(&self) -> &'static str {
        "Dry run"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn create_terminal(&self, options: &TerminalOptions) -> Result<TerminalHandle, TerminalError> {
        if options.launchable_shell().is_none() {
            return Err(TerminalError::MissingShell);
        }

        let id = format!("dry-run-{}", self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);

        let rendered = serde_json::to_string(options).map_err(|e| TerminalError::SpawnFailed {
            message: format!("failed to render options: {}", e),
        })?;
        self.emit(format!("create {} {}", id, rendered));

        Ok(TerminalHandle::new(id, options.location))
    }

    fn show(&self, handle: &TerminalHandle) -> Result<(), TerminalError> {
        self.emit(format!("show {}", handle.id));
        Ok(())
    }

    fn send_text(
        &self,
        handle: &TerminalHandle,
        text: &str,
        add_new_line: bool,
    ) -> Result<(), TerminalError> {
        let suffix = if add_new_line { " enter" } else { "" };
        self.emit(format!("send {} {:?}{}", handle.id, text, suffix));
        Ok(())
    }
}
