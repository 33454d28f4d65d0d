//! Settings persistence
//!
//! Saves and loads [`EngineSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/chessreferee/settings.json` on Linux. Falls back to the working
//! directory if no configuration directory can be resolved.
//!
//! # Error Handling
//!
//! [`load_settings`] and [`save_settings`] return errors; [`load_or_default`]
//! logs them and falls back to defaults so a broken file never stops a game.
//!
//! # Usage
//!
//! The host binary calls [`load_or_default`] with [`settings_path`] (or a
//! `--settings` override) at startup, and [`save_settings`] when asked to
//! persist the merged command-line values.

use super::error::ConfigResult;
use super::EngineSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the default settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "ChessReferee") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        // Fallback to current directory
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`
pub fn load_settings(path: &Path) -> ConfigResult<EngineSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: EngineSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Read settings from `path`, or defaults if missing or invalid
pub fn load_or_default(path: &Path) -> EngineSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return EngineSettings::default();
    }

    match load_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("[SETTINGS] Failed to load settings at {:?}: {}. Using defaults.", path, e);
            EngineSettings::default()
        }
    }
}

/// Write settings to `path`, creating its directory if needed
pub fn save_settings(settings: &EngineSettings, path: &Path) -> ConfigResult<()> {
    settings.validate()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
