//! Data-directory resolution.

use pythia_core::Config;
use std::path::PathBuf;

/// Where the knowledge files live. Precedence: explicit flag, config
/// override, platform data dir.
pub fn resolve_data_dir(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.or_else(|| config.data_dir.clone())
        .unwrap_or_else(default_data_dir)
}

/// ~/.local/share/pythia on Linux, the platform equivalent elsewhere.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pythia")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_config() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        let resolved = resolve_data_dir(Some(PathBuf::from("/from/flag")), &config);
        assert_eq!(resolved, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_config_wins_over_default() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        assert_eq!(resolve_data_dir(None, &config), PathBuf::from("/from/config"));
    }

    #[test]
    fn test_default_ends_with_app_dir() {
        let config = Config::default();
        let resolved = resolve_data_dir(None, &config);
        assert!(resolved.ends_with("pythia"));
    }
}
