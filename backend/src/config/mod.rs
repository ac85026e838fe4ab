//! Server configuration.
//!
//! Configuration is read once at startup and handed to the components that need
//! it; nothing here is global. Sources, lowest precedence first:
//!
//! 1. built-in defaults,
//! 2. the TOML file named by `CATALOG_CONFIG` (default `catalog.toml`), if it exists,
//! 3. the environment variables `CATALOG_HOST`, `CATALOG_PORT`, `CATALOG_DATABASE`,
//!    `CATALOG_UPLOAD_DIR` and `RUST_LOG`.
//!
//! A `.env` file in the working directory is loaded into the environment first.

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub uploads: UploadConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            json_limit: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("catalog.sqlite"),
            max_connections: 8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Flat directory holding every uploaded file.
    pub dir: PathBuf,
    /// Public URL prefix the directory is served under.
    pub url_prefix: String,
    /// Per-file size limit for multipart uploads, in bytes.
    pub max_file_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads"),
            url_prefix: "/uploads".to_string(),
            max_file_bytes: 20 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `env_logger` filter, used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration from `.env`, the optional TOML file and the environment.
    pub fn load() -> CatalogResult<Config> {
        let _ = dotenvy::dotenv();

        let path = std::env::var("CATALOG_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            Config::from_file(&path)?
        } else {
            Config::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> CatalogResult<Config> {
        let raw = std::fs::read_to_string(path)?;
        Config::from_toml(&raw)
            .map_err(|e| CatalogError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml(raw: &str) -> CatalogResult<Config> {
        toml::from_str(raw).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Applies environment-style overrides. `lookup` returns the value of a variable, if set.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CatalogResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CATALOG_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CATALOG_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| CatalogError::Config(format!("invalid CATALOG_PORT {:?}", port)))?;
        }
        if let Some(path) = lookup("CATALOG_DATABASE") {
            self.database.path = PathBuf::from(path);
        }
        if let Some(dir) = lookup("CATALOG_UPLOAD_DIR") {
            self.uploads.dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup("RUST_LOG") {
            self.logging.level = level;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.uploads.url_prefix, "/uploads");
        assert_eq!(config.database.path, PathBuf::from("catalog.sqlite"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn toml_sections_override_defaults_field_by_field() {
        let config = Config::from_toml(
            r#"
            [server]
            port = 8088

            [uploads]
            dir = "/srv/catalog/uploads"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.uploads.dir, PathBuf::from("/srv/catalog/uploads"));
        assert_eq!(config.uploads.url_prefix, "/uploads");
    }

    #[test]
    fn environment_wins_over_file() {
        let mut config = Config::from_toml("[server]\nport = 8088").unwrap();
        let env: HashMap<&str, &str> = [
            ("CATALOG_PORT", "9000"),
            ("CATALOG_DATABASE", "/tmp/other.sqlite"),
        ]
        .into_iter()
        .collect();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.path, PathBuf::from("/tmp/other.sqlite"));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            Config::from_toml("[server]\nport = \"not a port\""),
            Err(CatalogError::Config(_))
        ));

        let mut config = Config::default();
        let result = config.apply_overrides(|key| (key == "CATALOG_PORT").then(|| "http".to_string()));
        assert!(matches!(result, Err(CatalogError::Config(_))));
    }
}
