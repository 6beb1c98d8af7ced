use clap::ArgMatches;
use tracing::{error, info};

use termdeck_core::{CommandError, Launcher, TerminalError, events};

use super::helpers::{GlobalOptions, print_launch_report};

pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let command = matches
        .get_one::<String>("command")
        .ok_or("Command argument is required")?;
    let opts = GlobalOptions::from_matches(matches);

    info!(
        event = "cli.run_started",
        command = command,
        dry_run = opts.dry_run
    );

    let table = opts.register_commands();

    let backend = match opts.backend() {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, TerminalError::NoBackendFound) {
                eprintln!("Tip: Install tmux, or use --dry-run to preview the preset.");
            }
            error!(event = "cli.run_failed", command = command, error = %e);
            events::log_command_error(&e);
            return Err(e.into());
        }
    };

    let notifier = opts.notifier();
    let launcher = Launcher::new(backend.as_ref(), &notifier);

    match table.invoke(command, &launcher) {
        Ok(report) => {
            print_launch_report(&report, backend.as_ref(), &notifier);
            info!(
                event = "cli.run_completed",
                command = command,
                preset = %report.preset
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            match &e {
                CommandError::UnknownCommand { .. } => {
                    eprintln!("Tip: Run 'termdeck list' to see registered commands.");
                }
                CommandError::NotAPresetCommand { .. } => {
                    eprintln!("Tip: Use 'termdeck pick' to choose a preset interactively.");
                }
            }
            error!(event = "cli.run_failed", command = command, error = %e);
            events::log_command_error(&e);
            Err(e.into())
        }
    }
}
