//! Configuration for the coursedesk TUI.
//!
//! A single TOML file plus `COURSEDESK_*` environment overrides, and
//! translation to `coursedesk_core::ServerConfig`. Command-line flags
//! are layered on top by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use coursedesk_core::ServerConfig;

/// Prefix for environment overrides (`COURSEDESK_API_URL`, ...).
pub const ENV_PREFIX: &str = "COURSEDESK_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the course API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds. Unset means no client-side timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Where the TUI writes its log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout: None,
            log_file: None,
        }
    }
}

fn default_api_url() -> String {
    coursedesk_core::DEFAULT_BASE_URL.into()
}

impl Config {
    /// Validate and convert into the runtime configuration.
    pub fn to_server_config(&self) -> Result<ServerConfig, ConfigError> {
        let url = Url::parse(self.api_url.trim()).map_err(|e| ConfigError::Validation {
            field: "api_url".into(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "api_url".into(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let mut server = ServerConfig::new(url);
        match self.timeout {
            Some(0) => {
                return Err(ConfigError::Validation {
                    field: "timeout".into(),
                    reason: "must be at least 1 second".into(),
                });
            }
            Some(secs) => server = server.with_timeout(Duration::from_secs(secs)),
            None => {}
        }
        Ok(server)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "coursedesk", "coursedesk").map_or_else(
        || PathBuf::from(".coursedesk").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load config from the canonical path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path` + environment. A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if anything goes wrong.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`, creating parent dirs.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.timeout, None);
        assert!(cfg.api_url.starts_with("http"));
    }

    #[test]
    fn default_url_is_the_api_default() {
        assert_eq!(Config::default().api_url, coursedesk_core::DEFAULT_BASE_URL);
        assert_eq!(
            Config::default().to_server_config().unwrap().url.as_str(),
            "http://localhost:3000/"
        );
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_url = \"http://courses.internal:8080\"\ntimeout = 15\n",
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.api_url, "http://courses.internal:8080");
        assert_eq!(cfg.timeout, Some(15));

        let server = cfg.to_server_config().unwrap();
        assert_eq!(server.url.as_str(), "http://courses.internal:8080/");
        assert_eq!(server.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout = \"soon\"\n").unwrap();
        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::Figment(_))
        ));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = Config {
            api_url: "https://api.example.com".into(),
            timeout: Some(5),
            log_file: Some(PathBuf::from("/tmp/cd.log")),
        };

        save_config_to(&cfg, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), cfg);
    }

    #[test]
    fn rejects_bad_urls_and_zero_timeout() {
        let bad_url = Config {
            api_url: "localhost:3000".into(),
            ..Config::default()
        };
        assert!(matches!(
            bad_url.to_server_config(),
            Err(ConfigError::Validation { .. })
        ));

        let zero = Config {
            timeout: Some(0),
            ..Config::default()
        };
        assert!(zero.to_server_config().is_err());
    }
}
