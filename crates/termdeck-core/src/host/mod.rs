//! Host-facing seams: user notifications and preset picking.
//!
//! A host is whatever process drives the core. The CLI implements these
//! with stderr messages and a numbered stdin prompt.

mod console;

pub use console::ConsoleNotifier;

/// User-visible notifications.
pub trait Notifier {
    fn error(&self, message: &str);
    fn warning(&self, message: &str);
    fn info(&self, message: &str);
}

/// Result of asking the user to choose one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Selected(String),
    /// The prompt was dismissed without a choice.
    Cancelled,
}

/// Single-choice prompt.
///
/// This is the only call in the crate that waits on the user.
pub trait PresetPicker {
    fn pick(&self, title: &str, items: &[String]) -> PickOutcome;
}
