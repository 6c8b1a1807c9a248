use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILE};

use std::path::Path;

use serde::Deserialize;

/// Where the session store persists the token and user profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// File name relative to the config directory
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.trim().is_empty() {
            return Err(ConfigError::session("session.file cannot be empty"));
        }

        let path = Path::new(&self.file);
        if path.is_absolute() || self.file.contains("..") {
            return Err(ConfigError::session(
                "session.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
