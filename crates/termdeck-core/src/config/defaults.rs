//! Default locations for the presets file.

use std::path::PathBuf;

/// Directory holding the presets file, both per project and per user.
pub const CONFIG_DIR_NAME: &str = ".termdeck";

/// File names looked up inside [`CONFIG_DIR_NAME`], in priority order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["presets.toml", "presets.json"];

/// Environment variable naming an explicit presets file.
pub const CONFIG_ENV_VAR: &str = "TERMDECK_CONFIG";

/// Returns `~/.termdeck`, or `None` when the home directory is unknown.
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME))
}
