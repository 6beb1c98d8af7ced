use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::types::{Preset, Terminal};
use crate::host::Notifier;
use crate::presets::types::{LaunchReport, TerminalOutcome};
use crate::terminal::{
    TerminalBackend, TerminalError, TerminalHandle, TerminalOptions, map_terminal,
};

/// Directory existence check used when none is supplied.
fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Launches the terminals of a preset through a backend.
///
/// Problems with one terminal never stop the others, and nothing is
/// returned as an error: a missing working directory or a backend failure
/// is reported through the notifier, a missing shell is skipped silently.
pub struct Launcher<'a> {
    backend: &'a dyn TerminalBackend,
    notifier: &'a dyn Notifier,
    dir_exists: &'a dyn Fn(&Path) -> bool,
}

impl<'a> Launcher<'a> {
    pub fn new(backend: &'a dyn TerminalBackend, notifier: &'a dyn Notifier) -> Self {
        Self {
            backend,
            notifier,
            dir_exists: &path_exists,
        }
    }

    /// Replace the working-directory existence check.
    pub fn with_dir_check(mut self, dir_exists: &'a dyn Fn(&Path) -> bool) -> Self {
        self.dir_exists = dir_exists;
        self
    }

    pub fn notifier(&self) -> &'a dyn Notifier {
        self.notifier
    }

    pub fn backend(&self) -> &'a dyn TerminalBackend {
        self.backend
    }

    /// Launch every terminal of `preset`, in order.
    pub fn launch_preset(&self, preset: &Preset) -> LaunchReport {
        info!(
            event = "core.presets.launch_started",
            preset = %preset.name,
            terminal_count = preset.terminals.len(),
            backend = self.backend.name()
        );

        let outcomes: Vec<TerminalOutcome> = preset
            .terminals
            .iter()
            .map(|terminal| self.launch_terminal(preset, terminal))
            .collect();

        let report = LaunchReport {
            preset: preset.name.clone(),
            outcomes,
        };

        info!(
            event = "core.presets.launch_completed",
            preset = %preset.name,
            launched = report.launched_count(),
            skipped = report.skipped_count(),
            failed = report.failed_count()
        );

        report
    }

    fn launch_terminal(&self, preset: &Preset, terminal: &Terminal) -> TerminalOutcome {
        let name = terminal.display_name().to_string();

        if let Some(cwd) = terminal.cwd.as_deref()
            && !cwd.as_os_str().is_empty()
            && !(self.dir_exists)(cwd)
        {
            warn!(
                event = "core.presets.invalid_working_dir",
                preset = %preset.name,
                terminal = %name,
                cwd = %cwd.display()
            );
            self.notifier.error(&format!(
                "Invalid working dir \"{}\" for terminal \"{}\" in preset \"{}\"",
                cwd.display(),
                name,
                preset.name
            ));
            return TerminalOutcome::InvalidWorkingDir {
                name,
                cwd: cwd.to_path_buf(),
            };
        }

        let options = map_terminal(terminal);

        if options.launchable_shell().is_none() {
            debug!(
                event = "core.presets.terminal_skipped",
                preset = %preset.name,
                terminal = %name,
                reason = "no shell path"
            );
            return TerminalOutcome::NoShell { name };
        }

        let command = terminal.command.as_deref().filter(|c| !c.is_empty());

        match self.start(&options, command) {
            Ok(handle) => {
                debug!(
                    event = "core.presets.terminal_launched",
                    preset = %preset.name,
                    terminal = %name,
                    handle = %handle.id,
                    location = %handle.location
                );
                TerminalOutcome::Launched {
                    name,
                    handle,
                    command_sent: command.is_some(),
                }
            }
            Err(e) => {
                warn!(
                    event = "core.presets.terminal_failed",
                    preset = %preset.name,
                    terminal = %name,
                    error = %e
                );
                self.notifier.error(&format!(
                    "Failed to launch terminal \"{}\" in preset \"{}\": {}",
                    name, preset.name, e
                ));
                TerminalOutcome::Failed {
                    name,
                    error: e.to_string(),
                }
            }
        }
    }

    fn start(
        &self,
        options: &TerminalOptions,
        command: Option<&str>,
    ) -> Result<TerminalHandle, TerminalError> {
        let handle = self.backend.create_terminal(options)?;
        self.backend.show(&handle)?;
        if let Some(command) = command {
            self.backend.send_text(&handle, command, true)?;
        }
        Ok(handle)
    }
}
