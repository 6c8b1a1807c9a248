use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_URL};

use pessoas_core::SchemaVersion;

use serde::Deserialize;

/// Remote API location and the default person schema for single-record commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub version: SchemaVersion,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_URL),
            version: SchemaVersion::default(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        let host = url
            .split_once("://")
            .map(|(_, rest)| rest.trim_end_matches('/'))
            .unwrap_or_default();
        if host.is_empty() {
            return Err(ConfigError::api("api.base_url is missing a host"));
        }

        Ok(())
    }
}
