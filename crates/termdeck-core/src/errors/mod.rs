use std::error::Error;

/// Base trait for all termdeck errors
pub trait DeckError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Message shown when a config failure carries no usable description.
pub const GENERIC_CONFIG_FAILURE: &str = "Failed to load configuration file";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No config file found")]
    ConfigNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Unsupported config file format '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ConfigError {
    /// The text shown to the user for this failure.
    ///
    /// The error's own message is surfaced verbatim. When the underlying
    /// parser or I/O error says nothing, the generic fallback is used.
    pub fn user_message(&self) -> String {
        let detail_missing = match self {
            ConfigError::ConfigParseError { message, .. } => message.trim().is_empty(),
            ConfigError::ReadFailed { source, .. } => source.to_string().trim().is_empty(),
            _ => false,
        };

        if detail_missing {
            GENERIC_CONFIG_FAILURE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl DeckError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigNotFound => "CONFIG_NOT_FOUND",
            ConfigError::ReadFailed { .. } => "CONFIG_READ_FAILED",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::UnsupportedFormat { .. } => "CONFIG_UNSUPPORTED_FORMAT",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigNotFound
                | ConfigError::ConfigParseError { .. }
                | ConfigError::UnsupportedFormat { .. }
                | ConfigError::InvalidConfiguration { .. }
        )
    }
}
