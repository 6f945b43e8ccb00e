//! Configuration management for InfoCheck.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main application configuration.
///
/// This is loaded from `~/.config/infocheck/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend lookup service settings
    pub api: ApiConfig,
    /// Autocomplete and search behavior
    pub search: SearchConfig,
    /// Statistics animation settings
    pub stats: StatsConfig,
    /// Persisted session record settings
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, falling back to defaults if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            let config: Self = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `INFOCHECK_API_URL`: Override the lookup service base URL
    /// - `INFOCHECK_DEBOUNCE_MS`: Override the autocomplete debounce interval
    /// - `INFOCHECK_SESSION_PATH`: Override the session record location
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable source (the process environment in
    /// production).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("INFOCHECK_API_URL") {
            tracing::debug!("Override api.base_url from env: {}", url);
            self.api.base_url = url;
        }

        if let Some(val) = lookup("INFOCHECK_DEBOUNCE_MS") {
            if let Ok(ms) = val.parse() {
                self.search.debounce_ms = ms;
                tracing::debug!("Override search.debounce_ms from env: {}", ms);
            }
        }

        if let Some(path) = lookup("INFOCHECK_SESSION_PATH") {
            tracing::debug!("Override session.path from env: {}", path);
            self.session.path = Some(PathBuf::from(path));
        }
    }

    /// Reject values the components cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(invalid("api.base_url", "must not be empty"));
        }
        if self.search.min_query_chars == 0 {
            return Err(invalid("search.min_query_chars", "must be at least 1"));
        }
        if self.stats.tick_rate_hz == 0 {
            return Err(invalid("stats.tick_rate_hz", "must be greater than zero"));
        }
        if !self.stats.duration_secs.is_finite() || self.stats.duration_secs < 0.0 {
            return Err(invalid(
                "stats.duration_secs",
                "must be a non-negative number of seconds",
            ));
        }
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/infocheck/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Get the data directory path.
    ///
    /// Uses XDG base directories: `~/.local/share/infocheck`
    pub fn data_dir() -> ConfigResult<PathBuf> {
        Ok(project_dirs()?.data_dir().to_path_buf())
    }

    /// Location of the persisted session record, honouring the override.
    pub fn session_path(&self) -> ConfigResult<PathBuf> {
        match &self.session.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join("usuario_logado.json")),
        }
    }
}

fn project_dirs() -> ConfigResult<ProjectDirs> {
    ProjectDirs::from("br", "infocheck", "infocheck").ok_or(ConfigError::NoConfigDir)
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Backend lookup service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the InfoCheck backend
    pub base_url: String,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout_secs: 10,
            timeout_secs: 30,
            user_agent: format!("InfoCheck/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    /// Connect timeout as a `Duration`.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Autocomplete and search behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a suggestion fetch
    pub debounce_ms: u64,
    /// Minimum trimmed query length that triggers a suggestion fetch
    pub min_query_chars: usize,
    /// Delay before hiding suggestions after the search box loses focus
    pub blur_grace_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_chars: 2,
            blur_grace_ms: 200,
        }
    }
}

impl SearchConfig {
    /// Debounce interval as a `Duration`.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Blur grace delay as a `Duration`.
    #[must_use]
    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }
}

/// Statistics animation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Animation length in seconds
    pub duration_secs: f64,
    /// Ticks per second
    pub tick_rate_hz: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            duration_secs: 2.0,
            tick_rate_hz: 60,
        }
    }
}

/// Persisted session record settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Explicit path of the session record (defaults to the data directory)
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.min_query_chars, 2);
        assert_eq!(config.search.blur_grace_ms, 200);
        assert_eq!(config.stats.tick_rate_hz, 60);
        assert!(config.session.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("[api]"));
        assert!(toml_str.contains("[search]"));
        assert!(toml_str.contains("[stats]"));

        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse serialized config");
        assert_eq!(parsed.api.base_url, config.api.base_url);
        assert_eq!(parsed.search.debounce_ms, config.search.debounce_ms);
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");

        let mut config = AppConfig::default();
        config.api.base_url = "https://api.infocheck.example".to_string();
        config.search.debounce_ms = 150;

        let contents = toml::to_string_pretty(&config).expect("serialize config");
        fs::write(&config_path, contents).expect("write config file");

        let loaded = AppConfig::load_from(&config_path).expect("load config");
        assert_eq!(loaded.api.base_url, "https://api.infocheck.example");
        assert_eq!(loaded.search.debounce_ms, 150);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let tmp = TempDir::new().expect("create temp dir");
        let loaded = AppConfig::load_from(&tmp.path().join("absent.toml")).expect("load config");
        assert_eq!(loaded.search.debounce_ms, 300);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("INFOCHECK_API_URL", "http://backend:9000"),
            ("INFOCHECK_DEBOUNCE_MS", "500"),
            ("INFOCHECK_SESSION_PATH", "/tmp/sessao.json"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| vars.get(key).map(ToString::to_string));

        assert_eq!(config.api.base_url, "http://backend:9000");
        assert_eq!(config.search.debounce_ms, 500);
        assert_eq!(
            config.session_path().expect("session path"),
            PathBuf::from("/tmp/sessao.json")
        );
    }

    #[test]
    fn test_unparseable_env_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| {
            (key == "INFOCHECK_DEBOUNCE_MS").then(|| "soon".to_string())
        });
        assert_eq!(config.search.debounce_ms, 300);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[search]
debounce_ms = 250

[stats]
duration_secs = 3.5
"#;

        let config: AppConfig = toml::from_str(toml_str).expect("parse partial config");
        assert_eq!(config.search.debounce_ms, 250);
        assert!((config.stats.duration_secs - 3.5).abs() < f64::EPSILON);
        // These should be defaults
        assert_eq!(config.search.min_query_chars, 2);
        assert_eq!(config.stats.tick_rate_hz, 60);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.stats.tick_rate_hz = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "stats.tick_rate_hz"
        ));

        let mut config = AppConfig::default();
        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.stats.duration_secs = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_rejects_invalid_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "[stats]\ntick_rate_hz = 0\n").expect("write config file");

        assert!(AppConfig::load_from(&config_path).is_err());
    }

    #[test]
    fn test_load_from_malformed_file_is_parse_error() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "[search\ndebounce_ms = ").expect("write config file");

        assert!(matches!(
            AppConfig::load_from(&config_path),
            Err(ConfigError::ParseError(_))
        ));
    }
}
