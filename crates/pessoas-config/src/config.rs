use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LoggingConfig, SessionConfig,
};

use pessoas_core::SchemaVersion;

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config once at startup.
    ///
    /// Loading order:
    /// 1. Check for PESSOAS_CONFIG_DIR env var, else use ./.pessoas/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PESSOAS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PESSOAS_CONFIG_DIR env var > ./.pessoas/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        Ok(())
    }

    /// Absolute path of the session file.
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.file))
    }

    /// Log configuration summary (never logs session contents).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (default schema {})",
            self.api.base_url, self.api.version
        );
        info!("  session: {}", self.session.file);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Api
        Self::apply_env_string("PESSOAS_API_URL", &mut self.api.base_url);
        Self::apply_env_version("PESSOAS_API_VERSION", &mut self.api.version)?;

        // Session
        Self::apply_env_string("PESSOAS_SESSION_FILE", &mut self.session.file);

        // Logging
        Self::apply_env_parse("PESSOAS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PESSOAS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PESSOAS_LOG_FILE", &mut self.logging.file);

        Ok(())
    }

    /// Helper: Apply the schema version override; an unknown version is an error
    fn apply_env_version(var_name: &str, target: &mut SchemaVersion) -> ConfigErrorResult<()> {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.parse().map_err(|_| {
                ConfigError::api(format!("{var_name} must be v1 or v2, got '{val}'"))
            })?;
        }
        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
