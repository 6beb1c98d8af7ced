use crate::errors::DeckError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{id}'")]
    UnknownCommand { id: String },

    #[error("Command '{id}' needs an interactive prompt")]
    NotAPresetCommand { id: String },
}

impl DeckError for CommandError {
    fn error_code(&self) -> &'static str {
        match self {
            CommandError::UnknownCommand { .. } => "UNKNOWN_COMMAND",
            CommandError::NotAPresetCommand { .. } => "NOT_A_PRESET_COMMAND",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_display() {
        let error = CommandError::UnknownCommand {
            id: "termdeck.preset.nope".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown command 'termdeck.preset.nope'");
        assert_eq!(error.error_code(), "UNKNOWN_COMMAND");
        assert!(error.is_user_error());
    }
}
