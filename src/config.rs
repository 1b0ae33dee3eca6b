//! Application configuration.

use crate::consts::cli_consts::{CONFIG_DIR, CONFIG_FILE};
use crate::dashboards::DashboardKind;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Dashboard opened by `start` when none is given.
    pub default_dashboard: DashboardKind,
    /// Paint a dark background behind the dashboard.
    pub with_background_color: bool,
}

/// Location of the config file, `~/.vietnam-dashboards/config.json`.
pub fn get_config_path() -> Result<PathBuf, DashboardError> {
    let home = home::home_dir().ok_or(DashboardError::NoHomeDirectory)?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

impl Config {
    #[cfg(test)]
    pub fn new(default_dashboard: DashboardKind, with_background_color: bool) -> Self {
        Config {
            default_dashboard,
            with_background_color,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an error if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, DashboardError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads the config at `path`, falling back to defaults.
    ///
    /// A missing file is silently replaced by defaults. Any other failure is
    /// returned alongside the defaults so the caller can report it.
    pub fn load_or_default(path: &Path) -> (Self, Option<DashboardError>) {
        if !path.exists() {
            return (Config::default(), None);
        }
        match Config::load_from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new(DashboardKind::IfiExposure, true);
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::default();
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config1 = Config::new(DashboardKind::TradeWar, false);
        config1.save(&path).unwrap();

        let config2 = Config::new(DashboardKind::PeaceImpact, true);
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    #[test]
    // Missing fields fall back to their defaults.
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"default_dashboard":"european-rearmament"}"#).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.default_dashboard, DashboardKind::EuropeanRearmament);
        assert!(!loaded.with_background_color);
    }

    #[test]
    fn test_load_or_default_reports_bad_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let (config, warning) = Config::load_or_default(&missing);
        assert_eq!(config, Config::default());
        assert!(warning.is_none());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"default_dashboard":"atlantis"}"#).unwrap();
        let (config, warning) = Config::load_or_default(&bad);
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }
}
