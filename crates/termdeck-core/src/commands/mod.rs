//! Entry points that tie config, picking and launching together.
//!
//! - [`run_interactive`] - load config, ask for a preset, launch it
//! - [`register_all`] - one command per preset, built once at start

pub mod errors;
pub mod interactive;
pub mod registration;

pub use errors::CommandError;
pub use interactive::{InteractiveOutcome, PICK_TITLE, run_interactive};
pub use registration::{
    CommandTable, PRESET_COMMAND_PREFIX, RUN_COMMAND_ID, RegisteredCommand, preset_command_id,
    register_all,
};
