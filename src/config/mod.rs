// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[content]` - Content service domain and API key
//! - `[email]` - Transactional email identifiers and recipient label
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Environment Overrides
//!
//! Credentials are usually injected at deploy time rather than written to
//! disk. Non-empty values of the following variables replace file values:
//!
//! | Variable | Setting |
//! |----------|---------|
//! | `FOLIO_MICROCMS_SERVICE_DOMAIN` | `content.service_domain` |
//! | `FOLIO_MICROCMS_API_KEY` | `content.api_key` |
//! | `FOLIO_EMAILJS_SERVICE_ID` | `email.service_id` |
//! | `FOLIO_EMAILJS_TEMPLATE_ID` | `email.template_id` |
//! | `FOLIO_EMAILJS_PUBLIC_KEY` | `email.public_key` |
//!
//! # Examples
//!
//! ```no_run
//! use folio::config;
//!
//! let (mut config, _warning) = config::load();
//! config.apply_env_overrides();
//! println!("content from {}", config.content.service_domain);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::port::EmailRequest;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Notification key reported when an existing config file cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

pub const ENV_SERVICE_DOMAIN: &str = "FOLIO_MICROCMS_SERVICE_DOMAIN";
pub const ENV_API_KEY: &str = "FOLIO_MICROCMS_API_KEY";
pub const ENV_EMAIL_SERVICE_ID: &str = "FOLIO_EMAILJS_SERVICE_ID";
pub const ENV_EMAIL_TEMPLATE_ID: &str = "FOLIO_EMAILJS_TEMPLATE_ID";
pub const ENV_EMAIL_PUBLIC_KEY: &str = "FOLIO_EMAILJS_PUBLIC_KEY";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Content service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    /// Subdomain of the hosted content service.
    #[serde(default = "default_service_domain")]
    pub service_domain: String,

    /// Read key sent with every request. Without it nothing is fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            service_domain: default_service_domain(),
            api_key: None,
        }
    }
}

/// Contact email settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,

    /// Name the message is addressed to.
    #[serde(default = "default_recipient_label")]
    pub recipient_label: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            recipient_label: default_recipient_label(),
        }
    }
}

impl EmailConfig {
    /// Builds a send request for the given template variables.
    ///
    /// Unset identifiers become empty strings; the sender reports them as
    /// not configured.
    #[must_use]
    pub fn request(
        &self,
        variables: std::collections::BTreeMap<String, String>,
    ) -> EmailRequest {
        EmailRequest {
            service_id: self.service_id.clone().unwrap_or_default(),
            template_id: self.template_id.clone().unwrap_or_default(),
            public_key: self.public_key.clone().unwrap_or_default(),
            variables,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub email: EmailConfig,
}

impl Config {
    /// Applies overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from `lookup`. Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(domain) = get(ENV_SERVICE_DOMAIN) {
            self.content.service_domain = domain;
        }
        if let Some(key) = get(ENV_API_KEY) {
            self.content.api_key = Some(key);
        }
        if let Some(id) = get(ENV_EMAIL_SERVICE_ID) {
            self.email.service_id = Some(id);
        }
        if let Some(id) = get(ENV_EMAIL_TEMPLATE_ID) {
            self.email.template_id = Some(id);
        }
        if let Some(key) = get(ENV_EMAIL_PUBLIC_KEY) {
            self.email.public_key = Some(key);
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_service_domain() -> String {
    DEFAULT_SERVICE_DOMAIN.to_string()
}

fn default_recipient_label() -> String {
    DEFAULT_RECIPIENT_LABEL.to_string()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a notification key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.content.service_domain, "yutahamasaki");
        assert_eq!(config.content.api_key, None);
        assert_eq!(config.email.recipient_label, "Portfolio Owner");
    }

    #[test]
    fn full_file_is_loaded_section_by_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\ntheme_mode = \"dark\"\n\n\
             [content]\nservice_domain = \"my-site\"\napi_key = \"secret\"\n\n\
             [email]\nservice_id = \"service_x\"\ntemplate_id = \"template_y\"\n\
             recipient_label = \"Yuta\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(
            loaded,
            Config {
                general: GeneralConfig {
                    theme_mode: ThemeMode::Dark,
                },
                content: ContentConfig {
                    service_domain: "my-site".to_string(),
                    api_key: Some("secret".to_string()),
                },
                email: EmailConfig {
                    service_id: Some("service_x".to_string()),
                    template_id: Some("template_y".to_string()),
                    public_key: None,
                    recipient_label: "Yuta".to_string(),
                },
            }
        );
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[content]\napi_key = \"abc\"\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.content.api_key.as_deref(), Some("abc"));
        assert_eq!(loaded.content.service_domain, DEFAULT_SERVICE_DOMAIN);
        assert_eq!(loaded.email, EmailConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"Light\"\n").expect("failed to parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        fs::write(base.join(CONFIG_FILE), "[general]\ntheme_mode = \"light\"\n")
            .expect("failed to write");

        let (loaded, warning) = load_with_override(Some(base));

        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[ broken").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = [
            (ENV_SERVICE_DOMAIN, "other"),
            (ENV_API_KEY, "key-123"),
            (ENV_EMAIL_SERVICE_ID, "svc"),
            (ENV_EMAIL_TEMPLATE_ID, "tpl"),
            (ENV_EMAIL_PUBLIC_KEY, "pub"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| (*v).to_string()));

        assert_eq!(config.content.service_domain, "other");
        assert_eq!(config.content.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.email.service_id.as_deref(), Some("svc"));
        assert_eq!(config.email.template_id.as_deref(), Some("tpl"));
        assert_eq!(config.email.public_key.as_deref(), Some("pub"));
    }

    #[test]
    fn empty_overrides_are_ignored() {
        let mut config = Config::default();
        config.content.api_key = Some("from-file".to_string());

        config.apply_overrides(|name| (name == ENV_API_KEY).then(|| "  ".to_string()));

        assert_eq!(config.content.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn email_request_uses_empty_strings_for_unset_ids() {
        let config = EmailConfig {
            service_id: Some("svc".to_string()),
            ..EmailConfig::default()
        };
        let request = config.request(Default::default());
        assert_eq!(request.service_id, "svc");
        assert_eq!(request.missing_credential(), Some("template id"));
    }
}
