use clap::ArgMatches;
use tracing::{error, info};

use termdeck_core::{InteractiveOutcome, Launcher, events, run_interactive};

use super::helpers::{GlobalOptions, print_launch_report};
use crate::picker::PromptPicker;

pub(crate) fn handle_pick_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let opts = GlobalOptions::from_matches(matches);

    info!(event = "cli.pick_started", dry_run = opts.dry_run);

    let backend = match opts.backend() {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Error: {}", e);
            error!(event = "cli.pick_failed", error = %e);
            events::log_command_error(&e);
            return Err(e.into());
        }
    };

    let notifier = opts.notifier();
    let launcher = Launcher::new(backend.as_ref(), &notifier);
    let picker = PromptPicker::stdin();

    // Config is read here rather than at start so edits show up on every pick
    match run_interactive(|| opts.load_config(), &picker, &launcher) {
        InteractiveOutcome::Launched(report) => {
            print_launch_report(&report, backend.as_ref(), &notifier);
            info!(event = "cli.pick_completed", preset = %report.preset);
            Ok(())
        }
        InteractiveOutcome::Cancelled => {
            info!(event = "cli.pick_cancelled");
            Ok(())
        }
        InteractiveOutcome::ConfigUnavailable => {
            error!(event = "cli.pick_failed", reason = "config unavailable");
            Err("Could not load presets".into())
        }
        InteractiveOutcome::NoMatch { selection } => {
            error!(event = "cli.pick_failed", selection = %selection);
            Err(format!("No preset named '{}'", selection).into())
        }
    }
}
