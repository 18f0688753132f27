/// Server configuration
use crate::error::{Result, ServerError};
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use starter_storage::PoolSettings;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable prefix, e.g. `STARTER_SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "STARTER";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub app: AppSettings,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppSettings {
    #[serde(default)]
    pub environment: Environment,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub enable_https: bool,

    #[serde(default = "default_https_port")]
    pub https_port: u16,

    #[serde(default = "default_tls_cert_path")]
    pub tls_cert_path: PathBuf,

    #[serde(default = "default_tls_key_path")]
    pub tls_key_path: PathBuf,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_shutdown_grace_secs")]
    pub shutdown_grace_secs: u64,

    /// Origins allowed to call the API from a browser; empty disables CORS
    #[serde(default)]
    pub allowed_cors_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_database_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_max_lifetime_secs")]
    pub max_lifetime_secs: u64,
}

impl ServerConfig {
    /// Load configuration from an optional TOML file and the environment
    ///
    /// A missing file is not an error; defaults and `STARTER_*` variables
    /// still apply. Nested keys use `__`, e.g. `STARTER_DATABASE__URL`.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_cors_urls")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let server = &self.server;

        if server.port == 0 {
            return Err(ServerError::Config("server.port must be non-zero".to_string()));
        }

        if server.request_timeout_secs == 0 {
            return Err(ServerError::Config(
                "server.request_timeout_secs must be non-zero".to_string(),
            ));
        }

        if self.database.url.trim().is_empty() {
            return Err(ServerError::Config(
                "database.url is required (set STARTER_DATABASE__URL)".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ServerError::Config(
                "database.max_connections must be non-zero".to_string(),
            ));
        }

        if let Some(origin) = server
            .allowed_cors_urls
            .iter()
            .find(|origin| HeaderValue::from_str(origin).is_err())
        {
            return Err(ServerError::Config(format!(
                "invalid CORS origin {origin:?}"
            )));
        }

        if server.enable_https {
            if server.https_port == 0 || server.https_port == server.port {
                return Err(ServerError::Config(
                    "server.https_port must be non-zero and differ from server.port".to_string(),
                ));
            }

            for path in [&server.tls_cert_path, &server.tls_key_path] {
                if !path.exists() {
                    return Err(ServerError::Config(format!(
                        "TLS file not found at {path:?}"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

impl DatabaseSettings {
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.connect_timeout_secs),
            max_lifetime: Duration::from_secs(self.max_lifetime_secs),
        }
    }
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_https_port() -> u16 {
    443
}

fn default_tls_cert_path() -> PathBuf {
    PathBuf::from("certs/cert.pem")
}

fn default_tls_key_path() -> PathBuf {
    PathBuf::from("certs/key.pem")
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_shutdown_grace_secs() -> u64 {
    30
}

fn default_database_url() -> String {
    "sqlite://./data/starter.db".to_string()
}

fn default_max_connections() -> u32 {
    25
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_max_lifetime_secs() -> u64 {
    300
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_https: false,
            https_port: default_https_port(),
            tls_cert_path: default_tls_cert_path(),
            tls_key_path: default_tls_key_path(),
            request_timeout_secs: default_request_timeout_secs(),
            shutdown_grace_secs: default_shutdown_grace_secs(),
            allowed_cors_urls: Vec::new(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_lifetime_secs: default_max_lifetime_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(60));
        assert_eq!(config.database.pool_settings(), PoolSettings::default());
        assert_eq!(config.app.environment, Environment::Development);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.https_port, 443);
        assert_eq!(config.database.url, "sqlite://./data/starter.db");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[app]
environment = "production"

[server]
port = 9090
request_timeout_secs = 5
allowed_cors_urls = ["http://localhost:3000"]

[database]
url = "sqlite://./custom.db"
"#
        )
        .unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.app.environment, Environment::Production);
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.request_timeout_secs, 5);
        assert_eq!(config.server.allowed_cors_urls, ["http://localhost:3000"]);
        assert_eq!(config.server.shutdown_grace_secs, 30);
        assert_eq!(config.database.url, "sqlite://./custom.db");
        assert_eq!(config.database.max_connections, 25);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = ServerConfig::default();
        config.server.request_timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn invalid_cors_origin_is_rejected() {
        let mut config = ServerConfig::default();
        config.server.allowed_cors_urls = vec!["http://bad\norigin".to_string()];
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn https_requires_certificate_files() {
        let mut config = ServerConfig::default();
        config.server.enable_https = true;
        config.server.tls_cert_path = PathBuf::from("/nonexistent/cert.pem");
        config.server.tls_key_path = PathBuf::from("/nonexistent/key.pem");
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }
}
