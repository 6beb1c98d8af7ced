//! Platform-native desktop notification dispatch.
//!
//! Best-effort notifications: failures are logged but never propagate.
//! Used by `termdeck --notify` to mirror launch errors and warnings outside
//! the terminal that ran the command.

use tracing::{info, warn};

#[cfg(not(target_os = "macos"))]
use tracing::debug;

/// Send a platform-native desktop notification (best-effort).
///
/// - macOS: `osascript` (Notification Center)
/// - Linux: `notify-send` (requires libnotify)
/// - Other: no-op
pub fn send_notification(title: &str, message: &str) {
    info!(
        event = "core.notify.send_started",
        title = title,
        message = message,
    );

    send_platform_notification(title, message);
}

/// The AppleScript snippet that posts a notification.
pub fn applescript_notification(title: &str, message: &str) -> String {
    use crate::terminal::common::escape::applescript_escape;

    format!(
        r#"display notification "{}" with title "{}""#,
        applescript_escape(message),
        applescript_escape(title)
    )
}

#[cfg(target_os = "macos")]
fn send_platform_notification(title: &str, message: &str) {
    let script = applescript_notification(title, message);
    report_outcome(
        title,
        std::process::Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output(),
    );
}

#[cfg(target_os = "linux")]
fn send_platform_notification(title: &str, message: &str) {
    match which::which("notify-send") {
        Ok(_) => {}
        Err(which::Error::CannotFindBinaryPath) => {
            debug!(
                event = "core.notify.send_skipped",
                reason = "notify-send not found",
            );
            return;
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                title = title,
                error = %e,
            );
            return;
        }
    }

    report_outcome(
        title,
        std::process::Command::new("notify-send")
            .arg(title)
            .arg(message)
            .output(),
    );
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn send_platform_notification(_title: &str, _message: &str) {
    debug!(
        event = "core.notify.send_skipped",
        reason = "unsupported platform",
    );
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
fn report_outcome(title: &str, result: std::io::Result<std::process::Output>) {
    match result {
        Ok(output) if output.status.success() => {
            info!(event = "core.notify.send_completed", title = title);
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                event = "core.notify.send_failed",
                title = title,
                stderr = %stderr,
            );
        }
        Err(e) => {
            warn!(
                event = "core.notify.send_failed",
                title = title,
                error = %e,
            );
        }
    }
}
