//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\vinyls\config.toml
//! - macOS: ~/Library/Application Support/vinyls/config.toml
//! - Linux: ~/.config/vinyls/config.toml
//!
//! Only the external services are configurable. The collection document and
//! the covers directory stay at fixed paths relative to the project, because
//! the web front end reads them from there.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::lookup::{CoverSize, coverart, musicbrainz};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// MusicBrainz search settings
    pub musicbrainz: MusicBrainzConfig,

    /// Cover Art Archive settings
    pub coverart: CoverArtConfig,

    /// Shared HTTP settings
    pub http: HttpConfig,
}

/// MusicBrainz settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicBrainzConfig {
    /// Web service root (override for a mirror)
    pub base_url: String,

    /// Contact info sent in the User-Agent, as MusicBrainz asks
    pub contact: String,
}

impl Default for MusicBrainzConfig {
    fn default() -> Self {
        Self {
            base_url: musicbrainz::DEFAULT_BASE_URL.to_string(),
            contact: "https://github.com/vinyls".to_string(),
        }
    }
}

/// Cover Art Archive settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverArtConfig {
    pub base_url: String,

    /// Which thumbnail to download: "small", "medium", "large", "original"
    pub size: CoverSize,
}

impl Default for CoverArtConfig {
    fn default() -> Self {
        Self {
            base_url: coverart::DEFAULT_BASE_URL.to_string(),
            size: CoverSize::Medium,
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("vinyls"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file, with the same fallbacks as [`load`].
pub fn load_from(path: &std::path::Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    let path = dir.join("config.toml");
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file
pub fn save_to(config: &Config, path: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    // Serialize to pretty TOML
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
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
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[musicbrainz]"));
        assert!(toml.contains("[coverart]"));
        assert!(toml.contains("[http]"));
        assert!(toml.contains("size = \"medium\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.musicbrainz.contact = "me@example.com".to_string();
        config.coverart.size = CoverSize::Large;
        config.http.timeout_secs = 5;

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        // Config with only some fields
        let toml = r#"
[coverart]
size = "small"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        // Specified field is set
        assert_eq!(config.coverart.size, CoverSize::Small);

        // Other fields use defaults
        assert_eq!(config.coverart.base_url, "https://coverartarchive.org");
        assert_eq!(config.musicbrainz.base_url, "https://musicbrainz.org/ws/2");
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_timeout_never_zero() {
        let http = HttpConfig { timeout_secs: 0 };
        assert_eq!(http.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_save_then_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vinyls").join("config.toml");
        let mut config = Config::default();
        config.http.timeout_secs = 12;

        save_to(&config, &path).unwrap();
        assert_eq!(load_from(&path), config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_unparsable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[http]\ntimeout_secs = \"soon\"").unwrap();
        assert_eq!(load_from(&path), Config::default());
    }
}
