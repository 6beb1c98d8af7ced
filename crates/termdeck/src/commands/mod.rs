use clap::ArgMatches;
use tracing::error;

use termdeck_core::events;

pub mod helpers;
mod json_types;

mod completions;
mod list;
mod pick;
mod run;
mod show;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_startup(matches.subcommand_name().unwrap_or_default());

    match matches.subcommand() {
        Some(("pick", sub_matches)) => pick::handle_pick_command(sub_matches),
        Some(("run", sub_matches)) => run::handle_run_command(sub_matches),
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("show", sub_matches)) => show::handle_show_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
