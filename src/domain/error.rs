use std::fmt;
use std::io;

use thiserror::Error;

/// Remote generative subsystem that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    /// Text argument for a prediction.
    Explanation,
    /// Background image for the artifact.
    Vision,
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subsystem::Explanation => write!(f, "explanation"),
            Subsystem::Vision => write!(f, "vision"),
        }
    }
}

/// Library-wide error type for bright-futures operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Caller supplied an unusable value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The generative service failed or returned an unusable response.
    #[error("{message}")]
    RemoteService { subsystem: Subsystem, message: String, status: Option<u16> },

    /// Background image bytes could not be decoded.
    #[error("Failed to decode background image: {0}")]
    ImageDecode(String),

    /// Drawing or encoding the artifact failed.
    #[error("Rendering failed: {0}")]
    Render(String),

    /// No font face could be resolved for a text block.
    #[error("No usable font face for '{0}'")]
    FontUnavailable(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// A request of the same kind has not finished yet.
    #[error("A {0} request is already in flight")]
    AlreadyInFlight(&'static str),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn remote<S: Into<String>>(subsystem: Subsystem, message: S, status: Option<u16>) -> Self {
        AppError::RemoteService { subsystem, message: message.into(), status }
    }

    /// Underlying message without any subsystem-specific decoration.
    pub fn remote_message(&self) -> String {
        match self {
            AppError::RemoteService { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
