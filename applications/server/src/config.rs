/// Server configuration
use crate::error::{Result, ServerError};
use encore_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// JSON catalog file; missing file means an empty catalog
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load configuration from a specific file (if present) and environment
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables, e.g. ENCORE_SERVER__PORT=9000
        settings = settings.add_source(
            config::Environment::with_prefix("ENCORE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ServerError::Config(
                "Server host is required (set ENCORE_SERVER__HOST)".to_string(),
            ));
        }

        self.playback
            .validate()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(())
    }
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("./data/catalog.json")
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
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
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.playback.seek_pulse_ms, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_values_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9100\n\n[catalog]\npath = \"songs.json\"\n\n[playback]\nrestart_threshold_secs = 5.0\nshuffle = true"
        )
        .unwrap();

        let config = ServerConfig::load_from(file.path()).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.catalog.path, PathBuf::from("songs.json"));
        assert_eq!(config.playback.restart_threshold_secs, 5.0);
        assert!(config.playback.shuffle);
        assert_eq!(config.playback.error_skip_delay_ms, 1500);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ServerConfig::load_from(Path::new("/nonexistent/encore.toml")).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn rejects_invalid_playback_settings() {
        let mut config = ServerConfig::default();
        config.playback.restart_threshold_secs = -1.0;
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn rejects_blank_host() {
        let mut config = ServerConfig::default();
        config.server.host = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
