use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;
use termdeck_core::terminal::registry::VALID_BACKENDS;

pub fn build_cli() -> Command {
    Command::new("termdeck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Launch named presets of terminal sessions")
        .long_about("termdeck reads presets from .termdeck/presets.toml (or presets.json) in the current directory or any parent, falling back to ~/.termdeck/. Each preset is an ordered list of terminals with their shell, working directory, environment, color and initial command. Launching a preset opens every terminal of it in tmux.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Presets file to use (overrides discovery and TERMDECK_CONFIG)")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .short('b')
                .help("Terminal backend to launch with (default: detect)")
                .value_parser(VALID_BACKENDS)
                .global(true),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the terminals that would be created instead of creating them")
                .action(ArgAction::SetTrue)
                .conflicts_with("backend")
                .global(true),
        )
        .arg(
            Arg::new("notify")
                .long("notify")
                .help("Also show errors and warnings as desktop notifications")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("pick")
                .about("Choose a preset from a prompt and launch it")
        )
        .subcommand(
            Command::new("run")
                .about("Launch a preset by command id or slug")
                .arg(
                    Arg::new("command")
                        .help("Command id (termdeck.preset.<slug>) or slug")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("list")
                .about("List registered commands and the presets they launch")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("show")
                .about("Show the options each terminal of a preset would be created with")
                .arg(
                    Arg::new("command")
                        .help("Command id (termdeck.preset.<slug>) or slug")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}
