use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Persisted defaults for conversion runs. Everything here can be overridden
/// on the command line.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Whether images referenced by the source are embedded.
    #[serde(default = "default_process_images")]
    pub process_images: bool,
    /// Font profile override: "windows", "macos" or "linux". When absent the
    /// CLI picks the profile of the host OS.
    #[serde(default)]
    pub platform: Option<String>,
    /// Default directory for output files; falls back to the source
    /// directory when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_process_images() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            process_images: true,
            platform: None,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured output dir
        config.output_dir = config
            .output_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/md2docx");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/md2docx/config.toml"));
    }

    #[test]
    fn test_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_from_path(dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.toml");

        let config = Config {
            process_images: false,
            platform: Some("windows".to_string()),
            output_dir: Some(PathBuf::from("/tmp/out")),
        };
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_defaults_apply_to_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let loaded = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "process_images = \"maybe\"").unwrap();

        let result = Config::load_from_path(&path);
        assert!(matches!(
            result,
            Err(ConfigError::ConfigParseError { .. })
        ));
    }
}
