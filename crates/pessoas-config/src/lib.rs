mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_SESSION_FILE: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const CONFIG_DIR_ENV: &str = "PESSOAS_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".pessoas";
const CONFIG_FILE_NAME: &str = "config.toml";
