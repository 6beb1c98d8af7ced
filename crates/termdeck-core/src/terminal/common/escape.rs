//! String escaping utilities for terminal commands.

/// Escape a string for use in shell commands (single-quoted).
pub fn shell_escape(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\"'\"'"))
}

/// Escape a string for use in AppleScript.
pub fn applescript_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Build the command line that starts `shell_path` with its arguments.
///
/// Every part is single-quoted, so arguments reach the shell verbatim.
pub fn build_shell_command(shell_path: &str, shell_args: &[String]) -> String {
    std::iter::once(shell_path)
        .chain(shell_args.iter().map(String::as_str))
        .map(shell_escape)
        .collect::<Vec<_>>()
        .join(" ")
}
