//! Per-preset command registration.
//!
//! Commands are built once from a config snapshot. Each preset command holds
//! its own copy of the preset, so later edits to the presets file only take
//! effect for commands registered by a later start.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::commands::errors::CommandError;
use crate::config::types::{Config, Preset};
use crate::host::Notifier;
use crate::presets::{LaunchReport, Launcher};
use crate::slug::slugify;

/// Identifier of the interactive command, always registered.
pub const RUN_COMMAND_ID: &str = "termdeck.run";

/// Prefix of every per-preset command identifier.
pub const PRESET_COMMAND_PREFIX: &str = "termdeck.preset";

const NO_PRESETS_WARNING: &str =
    "No terminal presets found; only the interactive command is available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisteredCommand {
    /// Ask for a preset, then launch it.
    Interactive,
    /// Launch this preset without asking.
    Preset { slug: String, preset: Preset },
}

/// Registered commands, in registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    entries: Vec<(String, RegisteredCommand)>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command. Ids are expected to be unique; a repeated id is ignored.
    pub fn register(&mut self, id: impl Into<String>, command: RegisteredCommand) -> bool {
        let id = id.into();
        if self.get(&id).is_some() {
            warn!(event = "core.commands.duplicate_id_ignored", id = %id);
            return false;
        }
        debug!(event = "core.commands.registered", id = %id);
        self.entries.push((id, command));
        true
    }

    pub fn get(&self, id: &str) -> Option<&RegisteredCommand> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, command)| command)
    }

    /// Look up by full id, or by slug for preset commands.
    pub fn resolve(&self, query: &str) -> Option<(&str, &RegisteredCommand)> {
        let full_id = preset_command_id(query);
        self.entries
            .iter()
            .find(|(id, _)| id == query || *id == full_id)
            .map(|(id, command)| (id.as_str(), command))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisteredCommand)> {
        self.entries
            .iter()
            .map(|(id, command)| (id.as_str(), command))
    }

    /// Number of preset commands, the interactive command excluded.
    pub fn preset_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, command)| matches!(command, RegisteredCommand::Preset { .. }))
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Launch the preset bound to `query` (id or slug).
    ///
    /// # Errors
    ///
    /// Fails if nothing is registered under `query`, or if it names the
    /// interactive command, which needs a picker.
    pub fn invoke(
        &self,
        query: &str,
        launcher: &Launcher<'_>,
    ) -> Result<LaunchReport, CommandError> {
        match self.resolve(query) {
            Some((id, RegisteredCommand::Preset { preset, .. })) => {
                info!(event = "core.commands.invoke_started", id = id);
                Ok(launcher.launch_preset(preset))
            }
            Some((id, RegisteredCommand::Interactive)) => Err(CommandError::NotAPresetCommand {
                id: id.to_string(),
            }),
            None => Err(CommandError::UnknownCommand {
                id: query.to_string(),
            }),
        }
    }
}

/// Full command id for a preset slug.
pub fn preset_command_id(slug: &str) -> String {
    format!("{}.{}", PRESET_COMMAND_PREFIX, slug)
}

/// `base`, or `base-2`, `base-3`, ... whichever is first not in `taken`.
fn unique_slug(base: String, taken: &HashSet<String>) -> String {
    if !taken.contains(&base) {
        return base;
    }

    let mut suffix = 2;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !taken.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Build the command table from a config snapshot.
///
/// The interactive command is registered regardless. With no config, or a
/// config without presets, a single warning is shown.
pub fn register_all(config: Option<&Config>, notifier: &dyn Notifier) -> CommandTable {
    let mut table = CommandTable::new();
    table.register(RUN_COMMAND_ID, RegisteredCommand::Interactive);

    let presets = config.map(|c| c.presets.as_slice()).unwrap_or_default();

    let mut taken = HashSet::new();
    for (index, preset) in presets.iter().enumerate() {
        let fallback = format!("preset-{}", index + 1);
        let slug = unique_slug(slugify(&preset.name, &fallback), &taken);
        taken.insert(slug.clone());

        table.register(
            preset_command_id(&slug),
            RegisteredCommand::Preset {
                slug,
                preset: preset.clone(),
            },
        );
    }

    let registered = table.preset_count();
    if registered == 0 {
        notifier.warning(NO_PRESETS_WARNING);
    }

    info!(
        event = "core.commands.register_completed",
        preset_commands = registered,
        config_loaded = config.is_some()
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Terminal;
    use crate::test_support::{Notice, RecordingBackend, RecordingNotifier};

    fn config(names: &[&str]) -> Config {
        Config {
            presets: names
                .iter()
                .map(|name| Preset {
                    name: name.to_string(),
                    terminals: vec![Terminal {
                        name: Some(format!("{} shell", name)),
                        shell_path: Some("/bin/sh".to_string()),
                        ..Terminal::default()
                    }],
                })
                .collect(),
        }
    }

    fn slugs(table: &CommandTable) -> Vec<String> {
        table
            .iter()
            .filter_map(|(_, command)| match command {
                RegisteredCommand::Preset { slug, .. } => Some(slug.clone()),
                RegisteredCommand::Interactive => None,
            })
            .collect()
    }

    #[test]
    fn test_duplicate_names_are_disambiguated() {
        let notifier = RecordingNotifier::default();
        let table = register_all(Some(&config(&["Build", "Build", "Build"])), &notifier);

        assert_eq!(slugs(&table), vec!["build", "build-2", "build-3"]);
        assert_eq!(
            table.ids(),
            vec![
                "termdeck.run",
                "termdeck.preset.build",
                "termdeck.preset.build-2",
                "termdeck.preset.build-3"
            ]
        );
        assert!(notifier.notices().is_empty());
    }

    #[test]
    fn test_suffix_skips_taken_ids() {
        let notifier = RecordingNotifier::default();
        let table = register_all(Some(&config(&["Build 2", "Build", "Build"])), &notifier);

        assert_eq!(slugs(&table), vec!["build-2", "build", "build-3"]);
    }

    #[test]
    fn test_empty_slug_uses_index_fallback() {
        let notifier = RecordingNotifier::default();
        let table = register_all(Some(&config(&["Dev", "!!!", "日本"])), &notifier);

        assert_eq!(slugs(&table), vec!["dev", "preset-2", "preset-3"]);
    }

    #[test]
    fn test_no_config_registers_only_interactive_and_warns() {
        let notifier = RecordingNotifier::default();
        let table = register_all(None, &notifier);

        assert_eq!(table.ids(), vec!["termdeck.run"]);
        assert_eq!(table.get(RUN_COMMAND_ID), Some(&RegisteredCommand::Interactive));
        assert_eq!(
            notifier.notices(),
            vec![Notice::Warning(NO_PRESETS_WARNING.to_string())]
        );
    }

    #[test]
    fn test_empty_config_warns_once() {
        let notifier = RecordingNotifier::default();
        let table = register_all(Some(&Config::default()), &notifier);

        assert_eq!(table.len(), 1);
        assert_eq!(notifier.notices().len(), 1);
    }

    #[test]
    fn test_resolve_by_slug_or_full_id() {
        let notifier = RecordingNotifier::default();
        let table = register_all(Some(&config(&["My Preset!!"])), &notifier);

        let (id, _) = table.resolve("my-preset").unwrap();
        assert_eq!(id, "termdeck.preset.my-preset");
        assert!(table.resolve("termdeck.preset.my-preset").is_some());
        assert!(table.resolve("termdeck.run").is_some());
        assert!(table.resolve("other").is_none());
    }

    #[test]
    fn test_invoke_preset_launches_captured_preset() {
        let config = config(&["Build", "Build"]);
        let notifier = RecordingNotifier::default();
        let table = register_all(Some(&config), &notifier);
        drop(config);

        let backend = RecordingBackend::default();
        let launcher = Launcher::new(&backend, &notifier);
        let report = table.invoke("build-2", &launcher).unwrap();

        assert_eq!(report.preset, "Build");
        assert_eq!(report.launched_count(), 1);
        assert_eq!(backend.created().len(), 1);
    }

    #[test]
    fn test_invoke_unknown_and_interactive_fail() {
        let notifier = RecordingNotifier::default();
        let table = register_all(Some(&config(&["Dev"])), &notifier);
        let backend = RecordingBackend::default();
        let launcher = Launcher::new(&backend, &notifier);

        assert!(matches!(
            table.invoke("nope", &launcher),
            Err(CommandError::UnknownCommand { .. })
        ));
        assert!(matches!(
            table.invoke(RUN_COMMAND_ID, &launcher),
            Err(CommandError::NotAPresetCommand { .. })
        ));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_register_ignores_repeated_id() {
        let mut table = CommandTable::new();
        assert!(table.register("a", RegisteredCommand::Interactive));
        assert!(!table.register("a", RegisteredCommand::Interactive));
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }
}
