//! Configuration system using TOML files.
//!
//! Config is looked up in the OS-standard config directory unless a path is
//! given on the command line:
//! - Windows: %APPDATA%\song-library\config.toml
//! - macOS: ~/Library/Application Support/song-library/config.toml
//! - Linux: ~/.config/song-library/config.toml
//!
//! Every section has defaults, so a partial file (or none at all) is fine.
//! Command-line flags and their environment variables override file values;
//! see [`Overrides`].

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// Database settings
    pub storage: StorageConfig,

    /// Song info service settings
    pub song_info: SongInfoConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub address: String,

    /// Port to bind
    pub port: u16,

    /// How long in-flight requests may run after a shutdown signal
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            shutdown_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// Socket address to listen on.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host_port = if self.address.contains(':') {
            // IPv6 literal
            format!("[{}]:{}", self.address, self.port)
        } else {
            format!("{}:{}", self.address, self.port)
        };
        host_port
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(host_port))
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// Database settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file
    pub path: PathBuf,

    /// Connection pool size
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(crate::db::DEFAULT_DB_NAME),
            max_connections: 5,
        }
    }
}

/// Song info service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongInfoConfig {
    /// Base URL; requests go to `{base_url}/info`
    pub base_url: String,

    /// Request timeout
    pub timeout_secs: u64,
}

impl Default for SongInfoConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8081".to_string(),
            timeout_secs: 10,
        }
    }
}

impl SongInfoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Values given on the command line or through the environment.
///
/// `None` keeps whatever the config file (or the default) says.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub address: Option<String>,
    pub port: Option<u16>,
    pub storage_path: Option<PathBuf>,
    pub song_info_url: Option<String>,
}

impl Config {
    /// Apply command-line/environment overrides on top of this config.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(address) = overrides.address {
            self.server.address = address;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(path) = overrides.storage_path {
            self.storage.path = path;
        }
        if let Some(url) = overrides.song_info_url {
            self.song_info.base_url = url;
        }
        self
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.socket_addr()?;
        if self.storage.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "storage.max_connections must be at least 1".to_string(),
            ));
        }
        if self.song_info.base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "song_info.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("song-library"))
}

/// Get the full path to the default config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration.
///
/// With an explicit `path` the file must exist and parse. Without one, the
/// default location is tried and any problem there falls back to defaults
/// with a warning.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        tracing::info!("Loaded config from {:?}", path);
        return Ok(config);
    }

    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Ok(Config::default());
    };

    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                Ok(config)
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Ok(Config::default())
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Ok(Config::default())
        }
    }
}

/// Render configuration as pretty TOML
pub fn to_toml(config: &Config) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(ConfigError::Serialize)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = to_toml(&config).unwrap();
        assert!(toml.contains("[server]"));
        assert!(toml.contains("[storage]"));
        assert!(toml.contains("[song_info]"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.server.port = 9000;
        config.storage.path = PathBuf::from("/var/lib/songs.db");
        config.song_info.base_url = "http://songinfo.internal".to_string();

        let toml = to_toml(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[server]
port = 3000
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.address, "127.0.0.1");
        assert_eq!(config.server.shutdown_timeout_secs, 10);
        assert_eq!(config.storage.max_connections, 5);
        assert_eq!(config.song_info.timeout_secs, 10);
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::default().with_overrides(Overrides {
            address: Some("0.0.0.0".to_string()),
            port: Some(8000),
            storage_path: None,
            song_info_url: Some("http://example.test".to_string()),
        });

        assert_eq!(config.server.address, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.storage.path, PathBuf::from(crate::db::DEFAULT_DB_NAME));
        assert_eq!(config.song_info.base_url, "http://example.test");
    }

    #[test]
    fn test_socket_addr() {
        let mut server = ServerConfig::default();
        assert_eq!(server.socket_addr().unwrap().to_string(), "127.0.0.1:8080");

        server.address = "::1".to_string();
        assert_eq!(server.socket_addr().unwrap().to_string(), "[::1]:8080");

        server.address = "not an address".to_string();
        assert!(matches!(
            server.socket_addr(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.storage.max_connections = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[song_info]\nbase_url = \"http://localhost:9999\"\n").unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.song_info.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_load_explicit_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(load(Some(&missing)), Err(ConfigError::Read(..))));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        assert!(matches!(load(Some(&broken)), Err(ConfigError::Parse(..))));
    }
}
