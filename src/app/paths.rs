// SPDX-License-Identifier: MPL-2.0
//! Directory resolution for configuration and durable storage.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`FOLIO_DATA_DIR`, `FOLIO_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs`, with [`APP_NAME`] appended
//!
//! Settings (`settings.toml`) live in the config directory. The persisted
//! language choice lives in the data directory.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
pub const APP_NAME: &str = "Folio";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "FOLIO_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` and `--config-dir` arguments.
///
/// Call once at startup before resolving any path. Later calls are ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        tracing::debug!("directory overrides already initialized");
    }
}

/// Where a directory family is looked up.
struct DirSource {
    cli: &'static OnceLock<Option<PathBuf>>,
    env_var: &'static str,
    platform: fn() -> Option<PathBuf>,
}

static DATA: DirSource = DirSource {
    cli: &CLI_DATA_DIR,
    env_var: ENV_DATA_DIR,
    platform: dirs::data_dir,
};

static CONFIG: DirSource = DirSource {
    cli: &CLI_CONFIG_DIR,
    env_var: ENV_CONFIG_DIR,
    platform: dirs::config_dir,
};

impl DirSource {
    fn resolve(&self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = override_path {
            return Some(path);
        }

        if let Some(path) = self.cli.get().and_then(Clone::clone) {
            return Some(path);
        }

        if let Ok(env_path) = std::env::var(self.env_var) {
            if !env_path.is_empty() {
                return Some(PathBuf::from(env_path));
            }
        }

        (self.platform)().map(|mut path| {
            path.push(APP_NAME);
            path
        })
    }
}

/// Returns the application data directory.
///
/// Returns `None` if no platform data directory exists and nothing overrides it.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory, preferring `override_path`.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    DATA.resolve(override_path)
}

/// Returns the application config directory.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory, preferring `override_path`.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    CONFIG.resolve(override_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_data_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        assert_eq!(get_app_config_dir(), Some(PathBuf::from("/test/config/dir")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }
}
