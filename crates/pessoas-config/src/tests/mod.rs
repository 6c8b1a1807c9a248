
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point PESSOAS_CONFIG_DIR at it and clear
/// every override variable for the lifetime of the returned guards.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("PESSOAS_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("PESSOAS_API_URL"),
        EnvGuard::remove("PESSOAS_API_VERSION"),
        EnvGuard::remove("PESSOAS_SESSION_FILE"),
        EnvGuard::remove("PESSOAS_LOG_LEVEL"),
        EnvGuard::remove("PESSOAS_LOG_COLORED"),
        EnvGuard::remove("PESSOAS_LOG_FILE"),
    ];
    (temp, guards)
}
