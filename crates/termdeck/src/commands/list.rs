use clap::ArgMatches;
use tracing::info;

use termdeck_core::{CommandTable, RegisteredCommand};

use super::helpers::GlobalOptions;
use super::json_types::{CommandEntry, CommandKind};
use crate::table::TableFormatter;

const COLUMNS: [(&str, usize); 3] = [("Command", 48), ("Preset", 32), ("Terminals", 9)];

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let opts = GlobalOptions::from_matches(matches);

    info!(event = "cli.list_started", json_output = json_output);

    let table = opts.register_commands();
    let entries = command_entries(&table);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let rows: Vec<Vec<String>> = entries.iter().map(table_row).collect();
        TableFormatter::new(&COLUMNS, &rows).print_table(&rows);
    }

    info!(
        event = "cli.list_completed",
        count = entries.len(),
        presets = table.preset_count()
    );

    Ok(())
}

fn command_entries(table: &CommandTable) -> Vec<CommandEntry> {
    table
        .iter()
        .map(|(id, command)| match command {
            RegisteredCommand::Interactive => CommandEntry {
                id: id.to_string(),
                kind: CommandKind::Interactive,
                slug: None,
                preset: None,
                terminals: None,
            },
            RegisteredCommand::Preset { slug, preset } => CommandEntry {
                id: id.to_string(),
                kind: CommandKind::Preset,
                slug: Some(slug.clone()),
                preset: Some(preset.name.clone()),
                terminals: Some(preset.terminals.len()),
            },
        })
        .collect()
}

fn table_row(entry: &CommandEntry) -> Vec<String> {
    match entry.kind {
        CommandKind::Interactive => vec![
            entry.id.clone(),
            "(choose when run)".to_string(),
            String::new(),
        ],
        CommandKind::Preset => vec![
            entry.id.clone(),
            entry.preset.clone().unwrap_or_default(),
            entry.terminals.map(|n| n.to_string()).unwrap_or_default(),
        ],
    }
}
