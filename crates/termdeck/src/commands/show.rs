use std::path::Path;

use clap::ArgMatches;
use tracing::{error, info};

use termdeck_core::config::{Preset, Terminal};
use termdeck_core::{CommandError, RegisteredCommand, events, map_terminal};

use super::helpers::GlobalOptions;
use super::json_types::{PresetPreview, TerminalPreview, TerminalStatus};
use crate::table::TableFormatter;

const COLUMNS: [(&str, usize); 6] = [
    ("Terminal", 24),
    ("Location", 10),
    ("Shell", 24),
    ("Cwd", 32),
    ("Command", 24),
    ("Status", 11),
];

pub(crate) fn handle_show_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let command = matches
        .get_one::<String>("command")
        .ok_or("Command argument is required")?;
    let json_output = matches.get_flag("json");
    let opts = GlobalOptions::from_matches(matches);

    info!(
        event = "cli.show_started",
        command = command,
        json_output = json_output
    );

    let table = opts.register_commands();

    let preview = match table.resolve(command) {
        Some((id, RegisteredCommand::Preset { preset, .. })) => {
            preview_preset(id, preset, &|path: &Path| path.exists())
        }
        Some((id, RegisteredCommand::Interactive)) => {
            let e = CommandError::NotAPresetCommand { id: id.to_string() };
            return fail(command, e);
        }
        None => {
            let e = CommandError::UnknownCommand {
                id: command.to_string(),
            };
            return fail(command, e);
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else if preview.terminals.is_empty() {
        println!("Preset \"{}\" has no terminals.", preview.preset);
    } else {
        println!("Preset \"{}\" ({}):", preview.preset, preview.id);
        let rows: Vec<Vec<String>> = preview.terminals.iter().map(table_row).collect();
        TableFormatter::new(&COLUMNS, &rows).print_table(&rows);
    }

    info!(
        event = "cli.show_completed",
        command = command,
        terminals = preview.terminals.len()
    );

    Ok(())
}

fn fail(command: &str, e: CommandError) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Error: {}", e);
    error!(event = "cli.show_failed", command = command, error = %e);
    events::log_command_error(&e);
    Err(e.into())
}

/// Map every terminal without launching, noting which would be skipped.
fn preview_preset(id: &str, preset: &Preset, dir_exists: &dyn Fn(&Path) -> bool) -> PresetPreview {
    PresetPreview {
        id: id.to_string(),
        preset: preset.name.clone(),
        terminals: preset
            .terminals
            .iter()
            .map(|terminal| preview_terminal(terminal, dir_exists))
            .collect(),
    }
}

fn preview_terminal(terminal: &Terminal, dir_exists: &dyn Fn(&Path) -> bool) -> TerminalPreview {
    let options = map_terminal(terminal);

    let status = match options.working_directory() {
        Some(cwd) if !dir_exists(cwd) => TerminalStatus::MissingCwd,
        _ if options.launchable_shell().is_none() => TerminalStatus::NoShell,
        _ => TerminalStatus::Ready,
    };

    TerminalPreview {
        options,
        command: terminal.command.clone().filter(|c| !c.is_empty()),
        status,
    }
}

fn table_row(preview: &TerminalPreview) -> Vec<String> {
    let options = &preview.options;
    let shell = match (&options.shell_path, &options.shell_args) {
        (Some(path), Some(args)) if !args.is_empty() => format!("{} {}", path, args.join(" ")),
        (Some(path), _) => path.clone(),
        (None, _) => String::new(),
    };

    vec![
        options.name.clone().unwrap_or_else(|| "unnamed".to_string()),
        options.location.to_string(),
        shell,
        options
            .working_directory()
            .map(|cwd| cwd.display().to_string())
            .unwrap_or_default(),
        preview.command.clone().unwrap_or_default(),
        preview.status.label().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn only_exists(path: &Path) -> bool {
        path == Path::new("/exists")
    }

    fn terminal(shell: Option<&str>, cwd: Option<&str>) -> Terminal {
        Terminal {
            shell_path: shell.map(str::to_string),
            cwd: cwd.map(PathBuf::from),
            ..Terminal::default()
        }
    }

    #[test]
    fn test_status_matches_launch_gating() {
        let preset = Preset {
            name: "P".to_string(),
            terminals: vec![
                terminal(Some("/bin/sh"), Some("/exists")),
                terminal(Some("/bin/sh"), Some("/missing")),
                terminal(None, None),
                terminal(Some(""), Some("/missing")),
                terminal(Some("/bin/sh"), Some("")),
            ],
        };

        let preview = preview_preset("termdeck.preset.p", &preset, &only_exists);
        let statuses: Vec<TerminalStatus> = preview.terminals.iter().map(|t| t.status).collect();

        assert_eq!(
            statuses,
            vec![
                TerminalStatus::Ready,
                TerminalStatus::MissingCwd,
                TerminalStatus::NoShell,
                TerminalStatus::MissingCwd,
                TerminalStatus::Ready,
            ]
        );
    }

    #[test]
    fn test_table_row_columns() {
        let mut t = terminal(Some("/bin/bash"), Some("/exists"));
        t.name = Some("server".to_string());
        t.shell_args = Some(vec!["-l".to_string()]);
        t.location = Some("split:2".to_string());
        t.command = Some("npm run dev".to_string());

        let row = table_row(&preview_terminal(&t, &only_exists));
        assert_eq!(
            row,
            vec!["server", "split:2", "/bin/bash -l", "/exists", "npm run dev", "ready"]
        );
    }

    #[test]
    fn test_empty_command_is_omitted() {
        let mut t = terminal(Some("/bin/sh"), None);
        t.command = Some(String::new());

        let preview = preview_terminal(&t, &only_exists);
        assert_eq!(preview.command, None);
        let json = serde_json::to_value(&preview).unwrap();
        assert!(json.get("command").is_none());
        assert_eq!(json["status"], "ready");
        assert_eq!(json["options"]["icon"], "terminal");
    }
}
