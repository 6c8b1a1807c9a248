use std::io;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Session storage failures.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Cannot read {path}: {source} {location}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
        location: ErrorLocation,
    },

    /// Creating the parent directory or writing the staging file failed.
    #[error("Cannot write {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
        location: ErrorLocation,
    },

    /// Moving a file into place, or moving a corrupted one aside.
    #[error("Cannot move {from} to {to}: {source} {location}")]
    Replace {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
        location: ErrorLocation,
    },

    /// The file exists but is not a JSON object of strings.
    #[error("Session file corrupted at {path}: {message} {location}")]
    Corrupted {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot encode session entries: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// What the user can do about it.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::Read { .. } => "Check that the session file is readable.",
            Self::Write { .. } | Self::Replace { .. } => {
                "Check permissions on the configuration directory."
            }
            Self::Corrupted { .. } => "The stored session is ignored; logging in replaces it.",
            Self::Encode { .. } => "The session could not be stored.",
        }
    }

    #[track_caller]
    pub fn read(path: PathBuf, source: io::Error) -> Self {
        Self::Read {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn write(path: PathBuf, source: io::Error) -> Self {
        Self::Write {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn replace(from: PathBuf, to: PathBuf, source: io::Error) -> Self {
        Self::Replace {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupted(path: PathBuf, message: impl Into<String>) -> Self {
        Self::Corrupted {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SessionError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
