use crate::ClientError;

use std::fmt;

use log::{error, info, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Transient user-facing message produced at the action boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Convert a failed action into a notification, logging the full error.
    ///
    /// Local validation failures are warnings; everything else is an error.
    pub fn from_error(context: &str, err: &ClientError) -> Self {
        match err {
            ClientError::Validation { .. } => {
                info!("{context}: {err}");
                Self::warning(format!("{context}: {}", err.user_message()))
            }
            ClientError::MigrationIncomplete { .. } => {
                warn!("{context}: {err}");
                Self::error(format!("{context}: {}", err.user_message()))
            }
            _ => {
                error!("{context}: {err}");
                Self::error(format!("{context}: {}", err.user_message()))
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity.as_str(), self.message)
    }
}
