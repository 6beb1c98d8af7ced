//! Translation of terminal definitions into backend options.
//!
//! Mapping never fails. Unrecognized values degrade to defaults; whether a
//! terminal is launchable at all is decided by the launcher.

use crate::config::types::{Terminal, TerminalColor};
use crate::terminal::types::{TerminalLocation, TerminalOptions, ThemeColor};

/// Icon used when a terminal definition names none.
pub const DEFAULT_ICON: &str = "terminal";

/// Map one terminal definition to the options a backend expects.
pub fn map_terminal(terminal: &Terminal) -> TerminalOptions {
    TerminalOptions {
        name: terminal.name.clone(),
        cwd: terminal.cwd.clone(),
        env: terminal.env.clone(),
        shell_path: terminal.shell_path.clone(),
        shell_args: terminal.shell_args.clone(),
        color: terminal.color.map(theme_color),
        icon: resolve_icon(terminal.icon.as_deref()),
        message: resolve_message(terminal.message.as_deref()),
        location: resolve_location(terminal.location.as_deref()),
    }
}

/// Theme color key for each of the eight terminal colors.
pub fn theme_color(color: TerminalColor) -> ThemeColor {
    let key = match color {
        TerminalColor::Black => "terminal.ansiBlack",
        TerminalColor::Blue => "terminal.ansiBlue",
        TerminalColor::Cyan => "terminal.ansiCyan",
        TerminalColor::Green => "terminal.ansiGreen",
        TerminalColor::Magenta => "terminal.ansiMagenta",
        TerminalColor::Red => "terminal.ansiRed",
        TerminalColor::White => "terminal.ansiWhite",
        TerminalColor::Yellow => "terminal.ansiYellow",
    };
    ThemeColor::new(key)
}

fn resolve_icon(icon: Option<&str>) -> String {
    match icon {
        Some(icon) if !icon.is_empty() => icon.to_string(),
        _ => DEFAULT_ICON.to_string(),
    }
}

fn resolve_message(message: Option<&str>) -> Option<String> {
    message.filter(|m| !m.is_empty()).map(str::to_string)
}

/// Classify a free-form location string.
///
/// `editor` (any case) selects the editor area, `split:<n>` with a positive
/// `n` splits at column `n`. Everything else, malformed split syntax
/// included, lands in the panel.
pub fn resolve_location(location: Option<&str>) -> TerminalLocation {
    let Some(location) = location.filter(|l| !l.is_empty()) else {
        return TerminalLocation::Panel;
    };

    let normalized = location.to_lowercase();
    if normalized == "editor" {
        return TerminalLocation::Editor;
    }

    if normalized.starts_with("split") {
        return parse_split_column(location)
            .map(|column| TerminalLocation::Split { column })
            .unwrap_or(TerminalLocation::Panel);
    }

    TerminalLocation::Panel
}

/// Leading-integer parse of the part after the colon.
///
/// Leading whitespace and a sign are accepted and trailing text after the
/// digits is ignored (`3abc` is 3, `2.5` is 2). Columns past `u32::MAX`
/// saturate. Zero or negative columns are rejected.
fn parse_split_column(location: &str) -> Option<u32> {
    let parts: Vec<&str> = location.split(':').collect();
    let [_, column] = parts.as_slice() else {
        return None;
    };

    let column = column.trim_start();
    let (negative, unsigned) = match column.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, column.strip_prefix('+').unwrap_or(column)),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let value = digits.bytes().fold(0u32, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u32::from(digit - b'0'))
    });

    (!negative && value > 0).then_some(value)
}
