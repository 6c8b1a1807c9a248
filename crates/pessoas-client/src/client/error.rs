use pessoas_core::{SchemaVersion, ValidationErrors};
use pessoas_session::SessionError;

use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} ({status_code}) {location}")]
    Api {
        status_code: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON encode error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session error: {source} {location}")]
    Session {
        location: ErrorLocation,
        #[source]
        source: SessionError,
    },

    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },

    #[error("Not authenticated {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Person {id} not found in {version} {location}")]
    NotFound {
        id: i64,
        version: SchemaVersion,
        location: ErrorLocation,
    },

    #[error("Unexpected response: {message} {location}")]
    UnexpectedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid state: {message} {location}")]
    InvalidState {
        message: String,
        location: ErrorLocation,
    },

    /// The copy into the target collection succeeded but removing the
    /// original failed. Both records now exist.
    #[error(
        "Migration incomplete: created in {created_version}, \
         deleting {source_version} record {source_id} failed: {source} {location}"
    )]
    MigrationIncomplete {
        created_version: SchemaVersion,
        created_id: Option<i64>,
        source_version: SchemaVersion,
        source_id: i64,
        location: ErrorLocation,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status_code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(errors: ValidationErrors) -> Self {
        ClientError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        ClientError::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(id: i64, version: SchemaVersion) -> Self {
        ClientError::NotFound {
            id,
            version,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_response(message: impl Into<String>) -> Self {
        ClientError::UnexpectedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        ClientError::InvalidState {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn migration_incomplete(
        created_version: SchemaVersion,
        created_id: Option<i64>,
        source_version: SchemaVersion,
        source_id: i64,
        source: ClientError,
    ) -> Self {
        ClientError::MigrationIncomplete {
            created_version,
            created_id,
            source_version,
            source_id,
            location: ErrorLocation::from(Location::caller()),
            source: Box::new(source),
        }
    }

    /// Text shown to the user. Structured API errors read `message (code)`.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api {
                status_code,
                message,
                ..
            } => format!("{message} ({status_code})"),
            Self::Http { message, .. } => format!("Could not reach the server: {message}"),
            Self::Json { message, .. } => format!("Could not encode the request: {message}"),
            Self::Session { source, .. } => {
                format!("{source}. {}", source.recovery_hint())
            }
            Self::Validation { errors, .. } => errors.to_string(),
            Self::NotAuthenticated { .. } => {
                String::from("Session missing or expired. Log in again.")
            }
            Self::NotFound { id, version, .. } => {
                format!("Person {id} not found in {version}")
            }
            Self::UnexpectedResponse { message, .. } | Self::InvalidState { message, .. } => {
                message.clone()
            }
            Self::MigrationIncomplete {
                created_version,
                created_id,
                source_version,
                source_id,
                source,
                ..
            } => {
                let created = created_id
                    .map(|id| format!(" as record {id}"))
                    .unwrap_or_default();
                format!(
                    "Saved to {created_version}{created}, but removing {source_version} record \
                     {source_id} failed: {}. The person now exists in both collections.",
                    source.user_message()
                )
            }
        }
    }

    /// HTTP-style status code, when the error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            Self::Http { source, .. } => source.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<SessionError> for ClientError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        ClientError::Session {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
