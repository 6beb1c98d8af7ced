use tracing::{info, warn};

use crate::config::types::Config;
use crate::errors::{ConfigError, DeckError};
use crate::host::{PickOutcome, PresetPicker};
use crate::presets::{LaunchReport, Launcher};

/// Title of the preset selection prompt.
pub const PICK_TITLE: &str = "Select a terminal preset";

const INVALID_PRESET: &str = "Invalid preset";

/// How an interactive run ended.
///
/// Cancelling and picking an unknown name show the same message but stay
/// distinct here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveOutcome {
    Launched(LaunchReport),
    /// The config could not be found or parsed.
    ConfigUnavailable,
    /// The user dismissed the prompt.
    Cancelled,
    /// The selection matched no preset.
    NoMatch { selection: String },
}

/// Load config, ask the user for a preset and launch it.
///
/// `load` is called on every run, so edits to the presets file are picked up
/// the next time. Every failure is reported through the launcher's notifier.
pub fn run_interactive(
    load: impl FnOnce() -> Result<Config, ConfigError>,
    picker: &dyn PresetPicker,
    launcher: &Launcher<'_>,
) -> InteractiveOutcome {
    let notifier = launcher.notifier();

    let config = match load() {
        Ok(config) => config,
        Err(e) => {
            warn!(
                event = "core.commands.interactive_config_failed",
                error = %e,
                error_code = e.error_code()
            );
            notifier.error(&e.user_message());
            return InteractiveOutcome::ConfigUnavailable;
        }
    };

    let selection = match picker.pick(PICK_TITLE, &config.preset_names()) {
        PickOutcome::Selected(selection) => selection,
        PickOutcome::Cancelled => {
            info!(event = "core.commands.interactive_cancelled");
            notifier.error(INVALID_PRESET);
            return InteractiveOutcome::Cancelled;
        }
    };

    let Some(preset) = config.find_preset(&selection) else {
        warn!(
            event = "core.commands.interactive_no_match",
            selection = %selection
        );
        notifier.error(INVALID_PRESET);
        return InteractiveOutcome::NoMatch { selection };
    };

    info!(
        event = "core.commands.interactive_selected",
        preset = %preset.name
    );

    InteractiveOutcome::Launched(launcher.launch_preset(preset))
}
