use tracing::{error, info, warn};

use crate::host::Notifier;
use crate::notify::send_notification;

/// Notifier writing to stderr, optionally mirrored as desktop notifications.
pub struct ConsoleNotifier {
    desktop: bool,
}

impl ConsoleNotifier {
    pub fn new(desktop: bool) -> Self {
        Self { desktop }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Notifier for ConsoleNotifier {
    fn error(&self, message: &str) {
        eprintln!("Error: {}", message);
        error!(event = "core.notify.error_shown", message = message);
        if self.desktop {
            send_notification("termdeck", message);
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("Warning: {}", message);
        warn!(event = "core.notify.warning_shown", message = message);
        if self.desktop {
            send_notification("termdeck", message);
        }
    }

    fn info(&self, message: &str) {
        println!("{}", message);
        info!(event = "core.notify.info_shown", message = message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_notifier_does_not_panic() {
        let notifier = ConsoleNotifier::default();
        notifier.error("boom");
        notifier.warning("careful");
        notifier.info("hello");
    }
}
