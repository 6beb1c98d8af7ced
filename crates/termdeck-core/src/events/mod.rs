use tracing::{error, info, warn};

use crate::errors::DeckError;

pub fn log_startup(subcommand: &str) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        subcommand = subcommand
    );
}

/// Log a failed command by its error code.
///
/// User errors (bad input, missing presets) go out as warnings.
pub fn log_command_error(error: &dyn DeckError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.command_rejected",
            error = %error,
            error_code = error.error_code()
        );
    } else {
        error!(
            event = "core.app.command_failed",
            error = %error,
            error_code = error.error_code()
        );
    }
}
