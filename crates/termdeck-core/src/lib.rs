//! termdeck-core: Core library for launching named presets of terminal sessions
//!
//! A preset is a named, ordered group of terminal definitions read from a
//! user-authored config file. This library maps those definitions onto
//! terminal backend calls. It is used by the `termdeck` CLI.
//!
//! # Main Entry Points
//!
//! - [`config`] - Find, parse and validate the presets file
//! - [`terminal`] - Map terminal definitions to backend options, backends
//! - [`presets`] - Launch every terminal of a preset
//! - [`commands`] - Interactive picking and per-preset command registration
//! - [`slug`] - Identifier-safe fragments derived from preset names

pub mod commands;
pub mod config;
pub mod errors;
pub mod events;
pub mod host;
pub mod logging;
pub mod notify;
pub mod presets;
pub mod slug;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types at crate root for convenience
pub use commands::{
    CommandError, CommandTable, InteractiveOutcome, RegisteredCommand, register_all,
    run_interactive,
};
pub use config::{Config, Preset, Terminal, TerminalColor};
pub use errors::{ConfigError, DeckError};
pub use host::{Notifier, PickOutcome, PresetPicker};
pub use presets::{LaunchReport, Launcher, TerminalOutcome};
pub use slug::slugify;
pub use terminal::{
    TerminalBackend, TerminalError, TerminalHandle, TerminalLocation, TerminalOptions, ThemeColor,
    map_terminal,
};

// Re-export logging initialization
pub use logging::init_logging;
