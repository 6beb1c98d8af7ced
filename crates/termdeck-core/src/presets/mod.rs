pub mod launcher;
pub mod types;

pub use launcher::Launcher;
pub use types::{LaunchReport, TerminalOutcome};
