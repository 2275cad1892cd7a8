//! User configuration.
//!
//! Config file: ~/.config/pythia/config.toml. Every field is optional;
//! command-line flags override whatever is loaded here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grow the knowledge base from finished games
    #[serde(default = "default_true")]
    pub learn: bool,

    /// Show the posterior table and selector bounds every round
    /// Can also be enabled via PYTHIA_DEBUG=1
    #[serde(default)]
    pub debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            learn: true,
            debug: false,
        }
    }
}

impl GameConfig {
    /// Check if debug output is enabled (config or env)
    pub fn is_debug_enabled(&self) -> bool {
        self.debug
            || std::env::var("PYTHIA_DEBUG")
                .map(|v| v == "1")
                .unwrap_or(false)
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where the knowledge files live; None means the platform data dir
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Gameplay settings
    #[serde(default)]
    pub game: GameConfig,
}

impl Config {
    /// Get default user config path: ~/.config/pythia/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("XDG_CONFIG_HOME"))
            .context("Cannot determine home directory")?;

        let config_dir = if home.contains("/.config") {
            PathBuf::from(home)
        } else {
            Path::new(&home).join(".config")
        };

        Ok(config_dir.join("pythia").join("config.toml"))
    }

    /// Load configuration from the user config file, falling back to
    /// defaults when it does not exist.
    pub fn load() -> Result<Self> {
        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                let contents = fs::read_to_string(&user_path)
                    .with_context(|| format!("Failed to read {}", user_path.display()))?;
                let config: Config = toml::from_str(&contents)
                    .with_context(|| format!("Failed to parse {}", user_path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to the user config file.
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(&path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, None);
        assert!(config.game.learn);
        assert!(!config.game.debug);
    }

    #[test]
    fn test_toml_round_trip() {
        let original = Config {
            data_dir: Some(PathBuf::from("/tmp/pythia")),
            game: GameConfig {
                learn: false,
                debug: true,
            },
        };

        let toml = toml::to_string(&original).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.data_dir, Some(PathBuf::from("/tmp/pythia")));
        assert!(!parsed.game.learn);
        assert!(parsed.game.debug);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert!(parsed.game.learn);
        assert!(!parsed.game.debug);
        assert_eq!(parsed.data_dir, None);

        let partial: Config = toml::from_str("[game]\ndebug = true\n").unwrap();
        assert!(partial.game.learn);
        assert!(partial.game.debug);
    }

    #[test]
    fn test_toml_serialization_has_game_section() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/pythia")),
            ..Config::default()
        };
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("[game]"));
        assert!(toml.contains("learn"));
        assert!(toml.contains("data_dir"));
    }
}
