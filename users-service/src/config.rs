//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. `DATABASE_URL` (mapped onto `database.url`)
//! 2. Environment variables (prefix: `USERS_`, nested keys split on `__`)
//! 3. Current working directory: ./config.toml
//! 4. XDG config directory: ~/.config/users-service/config.toml
//! 5. System directory: /etc/users-service/config.toml
//! 6. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directory name used for XDG and system config lookups
const CONFIG_DIR_NAME: &str = "users-service";

/// Environment variable holding the PostgreSQL connection string
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name, reported by the health probes
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    #[serde(default)]
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_service_name() -> String {
    "users-service".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_connections() -> u32 {
    10
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Config files are merged lowest priority first, so `./config.toml`
    /// overrides the XDG file, which overrides the system file.
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        let config = Self::with_env(figment).extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Bypasses the XDG and system directories. Environment variables still
    /// take precedence over the file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()));

        let config = Self::with_env(figment).extract()?;
        Ok(config)
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(Env::prefixed("USERS_").split("__"))
            .merge(
                Env::raw()
                    .only(&[DATABASE_URL_ENV])
                    .map(|_| "database.url".into()),
            )
    }

    /// Find all possible config file paths
    ///
    /// Returns paths in priority order (highest first).
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(CONFIG_DIR_NAME);
        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            paths.push(path);
        }

        paths.push(
            PathBuf::from("/etc")
                .join(CONFIG_DIR_NAME)
                .join("config.toml"),
        );

        paths
    }

    /// Get the database URL, failing when none was configured
    pub fn database_url(&self) -> Result<&str> {
        if self.database.url.is_empty() {
            return Err(Error::from(figment::Error::from(format!(
                "database.url is empty; set {} or database.url in config.toml",
                DATABASE_URL_ENV
            ))));
        }
        Ok(&self.database.url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: default_service_name(),
                port: default_port(),
                log_level: default_log_level(),
            },
            database: DatabaseConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.port, 8000);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.service.name, "users-service");
        assert_eq!(config.database.max_connections, 10);
        assert!(config.database.url.is_empty());
    }

    #[test]
    fn test_empty_database_url_is_rejected() {
        let config = Config::default();
        let err = config.database_url().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(DATABASE_URL_ENV));
    }

    #[test]
    fn test_database_url_when_set() {
        let mut config = Config::default();
        config.database.url = "postgres://localhost/users".to_string();
        assert_eq!(config.database_url().unwrap(), "postgres://localhost/users");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[service]
name = "users-test"
log_level = "debug"

[database]
max_connections = 3
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.service.name, "users-test");
        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.database.max_connections, 3);
        // Unset keys fall back to defaults
        assert_eq!(config.service.port, 8000);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.service.name, "users-service");
    }
}
