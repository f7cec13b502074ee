use crate::keymap::Keymap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
    /// How long the splash screen stays up, fade included
    #[serde(default = "default_splash_duration_ms")]
    pub splash_duration_ms: u64,
    /// Where the onboarding flag is stored (default: state.toml next to this file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_splash_duration_ms() -> u64 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keymap: Keymap::default(),
            splash_duration_ms: default_splash_duration_ms(),
            state_file: None,
        }
    }
}

impl Config {
    /// Load configuration from file, writing the defaults if it is missing
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            info!("Loaded config from {:?}", config_path);
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            info!("Created default config at {:?}", config_path);
            Ok(config)
        }
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Flag store location. `~` is expanded; relative `state_file` values
    /// resolve against the directory holding `config_path`.
    pub fn state_path(&self, config_path: &Path) -> PathBuf {
        let config_dir = config_path
            .parent()
            .map_or_else(crate::utils::get_config_dir, Path::to_path_buf);
        match &self.state_file {
            Some(path) => {
                let path = crate::utils::expand_path(&path.to_string_lossy());
                if path.is_absolute() {
                    path
                } else {
                    config_dir.join(path)
                }
            }
            None => config_dir.join(crate::utils::path::STATE_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeymapPreset;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.splash_duration_ms, 3000);
        assert!(config.state_file.is_none());
    }

    #[test]
    fn test_missing_file_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("disruption").join("config.toml");

        let config = Config::load_or_create(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "theme = \"light\"\n[keymap]\npreset = \"vim\"\n").unwrap();

        let config = Config::load_or_create(&config_path).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.keymap.preset, KeymapPreset::Vim);
        assert_eq!(config.splash_duration_ms, 3000);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "splash_duration_ms = \"soon\"").unwrap();

        let err = Config::load_or_create(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_state_path_resolution() {
        let config_path = Path::new("/tmp/disruption/config.toml");
        let mut config = Config::default();
        assert_eq!(
            config.state_path(config_path),
            PathBuf::from("/tmp/disruption/state.toml")
        );

        config.state_file = Some(PathBuf::from("flags.toml"));
        assert_eq!(
            config.state_path(config_path),
            PathBuf::from("/tmp/disruption/flags.toml")
        );

        config.state_file = Some(PathBuf::from("/var/lib/disruption.toml"));
        assert_eq!(
            config.state_path(config_path),
            PathBuf::from("/var/lib/disruption.toml")
        );
    }
}
