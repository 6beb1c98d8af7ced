//! Structural checks applied after a presets file is deserialized.

use std::collections::HashSet;

use tracing::warn;

use crate::config::types::Config;
use crate::errors::ConfigError;

/// Validate a parsed configuration.
///
/// Preset names must be non-blank since they drive both selection and
/// command identifiers. Duplicate names are allowed but logged, because only
/// the first of them can be chosen by name.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for (index, preset) in config.presets.iter().enumerate() {
        if preset.name.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("preset #{} has an empty name", index + 1),
            });
        }

        if !seen.insert(preset.name.as_str()) {
            warn!(
                event = "core.config.duplicate_preset_name",
                preset = %preset.name,
                index = index + 1,
            );
        }
    }

    Ok(())
}
