use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{info, warn};

use termdeck_core::config::Config;
use termdeck_core::host::ConsoleNotifier;
use termdeck_core::terminal::{detect_backend, get_backend};
use termdeck_core::{
    CommandTable, ConfigError, LaunchReport, Notifier, TerminalBackend, TerminalError,
};
use termdeck_core::{TerminalOutcome, register_all};

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub backend: Option<String>,
    pub dry_run: bool,
    pub notify: bool,
}

impl GlobalOptions {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config: matches.get_one::<PathBuf>("config").cloned(),
            backend: matches.get_one::<String>("backend").cloned(),
            dry_run: matches.get_flag("dry-run"),
            notify: matches.get_flag("notify"),
        }
    }

    pub fn notifier(&self) -> ConsoleNotifier {
        ConsoleNotifier::new(self.notify)
    }

    /// `--dry-run`, then `--backend`, then whatever is available.
    pub fn backend(&self) -> Result<Box<dyn TerminalBackend>, TerminalError> {
        if self.dry_run {
            return get_backend("dry-run");
        }
        match &self.backend {
            Some(name) => get_backend(name),
            None => detect_backend(),
        }
    }

    pub fn load_config(&self) -> Result<Config, ConfigError> {
        Config::load(self.config.as_deref())
    }

    /// Load configuration, warning instead of failing.
    ///
    /// Used where a missing or broken presets file still leaves something
    /// useful to do, such as registering the interactive command.
    pub fn load_config_with_warning(&self) -> Option<Config> {
        match self.load_config() {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Could not load presets: {}", e.user_message());
                if matches!(e, ConfigError::ConfigNotFound) {
                    eprintln!(
                        "Tip: Create .termdeck/presets.toml here or in ~/.termdeck/, or pass --config."
                    );
                }
                warn!(
                    event = "cli.config.load_failed",
                    error = %e,
                    "Config load failed, continuing without presets"
                );
                None
            }
        }
    }

    /// Build the command table from a fresh config snapshot.
    pub fn register_commands(&self) -> CommandTable {
        let config = self.load_config_with_warning();
        register_all(config.as_ref(), &self.notifier())
    }
}

/// Summary line naming the preset and the backend that ran it.
pub fn launch_summary(report: &LaunchReport, backend: &dyn TerminalBackend) -> String {
    format!(
        "Launched {} of {} terminal(s) from preset \"{}\" ({})",
        report.launched_count(),
        report.outcomes.len(),
        report.preset,
        backend.display_name()
    )
}

/// Report the summary through the notifier, then a line per terminal that
/// did not launch.
pub fn print_launch_report(
    report: &LaunchReport,
    backend: &dyn TerminalBackend,
    notifier: &dyn Notifier,
) {
    notifier.info(&launch_summary(report, backend));

    for outcome in &report.outcomes {
        match outcome {
            TerminalOutcome::Launched { .. } => {}
            TerminalOutcome::InvalidWorkingDir { name, .. } => {
                println!("   skipped \"{}\": working directory missing", name);
            }
            TerminalOutcome::NoShell { name } => {
                println!("   skipped \"{}\": no shell configured", name);
            }
            TerminalOutcome::Failed { name, .. } => {
                println!("   failed \"{}\"", name);
            }
        }
    }

    info!(
        event = "cli.launch_report_printed",
        preset = %report.preset,
        backend = backend.name(),
        launched = report.launched_count(),
        skipped = report.skipped_count(),
        failed = report.failed_count()
    );
}
