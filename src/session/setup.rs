//! Session setup and initialization

use crate::config::{Config, get_config_path};
use crate::events::Event;
use crate::logging::{LogLevel, get_rust_log_level};
use std::path::Path;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Loaded configuration, or defaults
    pub config: Config,
    /// Events recorded while setting up, shown once the session starts
    pub startup_events: Vec<Event>,
    /// Least severe activity level to display
    pub log_threshold: LogLevel,
}

/// Loads the user's config and the `RUST_LOG` threshold.
///
/// Never fails. Config problems become warning events and defaults are used.
pub fn setup_session() -> SessionData {
    let (config, startup_events) = match get_config_path() {
        Ok(path) => load_config(&path),
        Err(e) => (
            Config::default(),
            vec![Event::config_warning(format!("{}; using defaults", e))],
        ),
    };
    SessionData {
        config,
        startup_events,
        log_threshold: get_rust_log_level(),
    }
}

/// Loads the config at `path`, describing the outcome as startup events.
pub fn load_config(path: &Path) -> (Config, Vec<Event>) {
    let (config, warning) = Config::load_or_default(path);
    let event = match warning {
        Some(e) => Event::config_warning(format!(
            "Ignoring config at {}: {}; using defaults",
            path.display(),
            e
        )),
        None if path.exists() => {
            Event::startup(format!("Loaded configuration from {}", path.display()))
        }
        None => Event::startup("No config file found; using defaults".to_string()),
    };
    (config, vec![event])
}
