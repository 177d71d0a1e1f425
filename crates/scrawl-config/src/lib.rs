//! Configuration loading for the Scrawl notes service.
//!
//! Settings are resolved in three layers: built-in defaults, an optional TOML
//! file (`scrawld.toml` next to the working directory, or an explicit path),
//! and `SCRAWL__*` environment variables (double underscore separates nested
//! keys, e.g. `SCRAWL__DATABASE__URL`). The database connection string has no
//! default and must come from the file or the environment.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

/// Error raised while assembling the application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
    /// Deployment environment name; `production` enables the extra log sink.
    pub environment: String,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Document store settings. `url` is a SurrealDB connection string such as
/// `ws://localhost:8000`, `rocksdb://./data/scrawl.db` or `mem://`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub namespace: String,
    pub database: String,
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub level: String,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the
    /// environment. A missing `database.url` surfaces as a load error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.namespace", "scrawl")?
            .set_default("database.database", "notes")?
            .set_default("log.dir", "logs")?
            .set_default("log.level", "info")?
            .set_default("environment", "development")?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("scrawld").required(false)),
        };

        let settings = builder
            .add_source(Environment::with_prefix("SCRAWL").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp config file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn loads_defaults_around_required_url() {
        let file = config_file("[database]\nurl = \"mem://\"\n");
        let config = AppConfig::load(Some(file.path())).expect("config should load");

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.url, "mem://");
        assert_eq!(config.database.namespace, "scrawl");
        assert_eq!(config.database.database, "notes");
        assert_eq!(config.log.level, "info");
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn file_values_override_defaults() {
        let file = config_file(
            "environment = \"production\"\n\
             [server]\nhost = \"0.0.0.0\"\nport = 8080\n\
             [database]\nurl = \"ws://db:8000\"\nnamespace = \"prod\"\n\
             [log]\nlevel = \"warn\"\n",
        );
        let config = AppConfig::load(Some(file.path())).expect("config should load");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "ws://db:8000");
        assert_eq!(config.database.namespace, "prod");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let file = config_file("[server]\nport = 4000\n");
        let result = AppConfig::load(Some(file.path()));
        assert!(result.is_err(), "database.url must be required");
    }
}
