use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "ZREDACTOR_CONFIG";

/// Optional settings for zredactor (never credentials)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Zendesk host suffix; the organization is prepended as a subdomain
    #[serde(default = "default_domain")]
    pub domain: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout. Unset means wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

fn default_domain() -> String {
    "zendesk.com".to_string()
}

fn default_user_agent() -> String {
    format!("zredactor/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Load config from the default location, falling back to defaults if absent
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        if let Some(dirs) = directories::ProjectDirs::from("com", "zredactor", "zredactor") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.zredactor/config.toml")
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.domain, "zendesk.com");
        assert!(config.user_agent.starts_with("zredactor/"));
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            timeout_secs: Some(15),
            ..Config::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.domain, config.domain);
        assert_eq!(parsed.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str(r#"domain = "zendesk-staging.com""#).unwrap();
        assert_eq!(parsed.domain, "zendesk-staging.com");
        assert!(parsed.user_agent.starts_with("zredactor/"));
        assert_eq!(parsed.timeout_secs, None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = 30\nuser_agent = \"ops-redactor\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.domain, "zendesk.com");
        assert_eq!(config.user_agent, "ops-redactor");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = \"soon\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config file"));
    }
}
