//! Presets file discovery and parsing.
//!
//! # Search Order
//!
//! 1. **`TERMDECK_CONFIG`** - explicit path, used only if the file exists
//! 2. **Project config** - `.termdeck/presets.toml` (then `.json`) in the
//!    current directory or the closest ancestor that has one
//! 3. **User config** - `~/.termdeck/presets.toml` (then `.json`)
//!
//! A config is never cached: every call reads the file again.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::defaults::{
    CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAMES, user_config_dir,
};
use crate::config::types::Config;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Serialization format of a presets file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

/// Locate the presets file for the current directory.
///
/// Returns `None` when no candidate exists.
pub fn find_config_file() -> Option<PathBuf> {
    let explicit = std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    let current_dir = std::env::current_dir().ok();
    let user_dir = user_config_dir();

    let found = search_config_file(
        explicit.as_deref(),
        current_dir.as_deref(),
        user_dir.as_deref(),
    );

    debug!(
        event = "core.config.search_completed",
        found = ?found.as_ref().map(|p| p.display().to_string()),
    );

    found
}

/// Search for a presets file given explicit inputs.
///
/// `explicit` short-circuits the search. Otherwise `start` and each of its
/// ancestors are probed for a `.termdeck` directory, then `user_dir` itself.
pub fn search_config_file(
    explicit: Option<&Path>,
    start: Option<&Path>,
    user_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return path.is_file().then(|| path.to_path_buf());
    }

    if let Some(start) = start {
        for dir in start.ancestors() {
            if let Some(found) = config_file_in(&dir.join(CONFIG_DIR_NAME)) {
                return Some(found);
            }
        }
    }

    user_dir.and_then(config_file_in)
}

fn config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Parse and validate the presets file at `path`.
///
/// # Errors
///
/// Fails when the extension is neither `.toml` nor `.json`, when the file
/// cannot be read, when it does not deserialize, or when validation fails.
/// The parser's own message is kept in the error.
pub fn parse_config(path: &Path) -> Result<Config, ConfigError> {
    let display_path = path.display().to_string();

    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: display_path.clone(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: display_path.clone(),
        source,
    })?;

    let config = parse_config_str(&content, format).map_err(|message| {
        ConfigError::ConfigParseError {
            path: display_path.clone(),
            message,
        }
    })?;

    validate_config(&config)?;

    info!(
        event = "core.config.parse_completed",
        path = %display_path,
        preset_count = config.presets.len(),
    );

    Ok(config)
}

/// Deserialize presets from text in the given format.
pub fn parse_config_str(content: &str, format: ConfigFormat) -> Result<Config, String> {
    match format {
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Find and parse the presets file.
///
/// `explicit` takes precedence over discovery (the CLI's `--config`).
///
/// # Errors
///
/// Returns [`ConfigError::ConfigNotFound`] when no file exists, otherwise
/// whatever [`parse_config`] reports.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) if path.is_file() => path.to_path_buf(),
        Some(path) => {
            debug!(
                event = "core.config.explicit_path_missing",
                path = %path.display(),
            );
            return Err(ConfigError::ConfigNotFound);
        }
        None => find_config_file().ok_or(ConfigError::ConfigNotFound)?,
    };

    parse_config(&path)
}
