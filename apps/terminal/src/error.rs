//! # App Error Types
//!
//! Errors the terminal front end can hit on its own: reading config,
//! reading stdin, writing output. Engine errors are never fatal here;
//! they are rendered as messages.

use thiserror::Error;

/// Result type alias for front end operations.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file exists but is not valid TOML.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// State could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A line of input that isn't a valid command.
///
/// Shown to the user; never ends the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("Unknown field '{0}'. Use amount, discount or extra.")]
    UnknownField(String),

    #[error("'{0}' is not a keypad key. Use 0-9, '.' or '<'.")]
    InvalidKey(char),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_errors_render_for_the_user() {
        let err = CommandError::MissingArgument {
            command: "currency",
            what: "a currency code",
        };
        assert_eq!(err.to_string(), "'currency' needs a currency code");
    }

    #[test]
    fn test_toml_errors_convert() {
        let parse_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }
}
