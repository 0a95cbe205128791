
use crate::CONFIG_DIR_ENV;

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

const OVERRIDE_VARS: [&str; 4] = [
    "ROSTER_DATABASE_PATH",
    "ROSTER_LOG_LEVEL",
    "ROSTER_LOG_COLORED",
    "ROSTER_LOG_FILE",
];

/// Create a temp config directory, point ROSTER_CONFIG_DIR at it and clear
/// any override vars inherited from the shell
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = OVERRIDE_VARS.into_iter().map(EnvGuard::remove).collect();
    guards.push(EnvGuard::set(CONFIG_DIR_ENV, temp.path().to_str().unwrap()));
    (temp, guards)
}
