use pessoas_client::ClientError;
use pessoas_config::ConfigError;
use pessoas_session::SessionError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures that stop the CLI before a command can run, or while writing
/// its output.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Session error: {source}")]
    Session {
        #[from]
        source: SessionError,
    },

    #[error("{source}")]
    Client {
        #[from]
        source: ClientError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Output error: {source} {location}")]
    Output {
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn output(source: serde_json::Error) -> Self {
        CliError::Output {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
