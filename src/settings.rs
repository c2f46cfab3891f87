//! Persisted user preferences and the store that reads/writes them.
//!
//! The settings file is a single JSON snapshot written after every
//! state-changing user action. Loading is tolerant: a missing or corrupt file
//! falls back to defaults, unknown keys are ignored, and folders that no
//! longer exist are dropped.

use crate::config::{
    DEFAULT_INTERVAL_SECS, DEFAULT_VIEWER_POSITION, DEFAULT_VIEWER_SIZE, MAX_INTERVAL_SECS,
    MIN_INTERVAL_SECS,
};
use crate::error::{AppError, Result};
use crate::state::PlayOrder;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Position and size of the detached viewer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for ViewerGeometry {
    fn default() -> Self {
        Self {
            x: DEFAULT_VIEWER_POSITION.0,
            y: DEFAULT_VIEWER_POSITION.1,
            width: DEFAULT_VIEWER_SIZE.0,
            height: DEFAULT_VIEWER_SIZE.1,
        }
    }
}

fn default_interval() -> u32 {
    DEFAULT_INTERVAL_SECS
}

fn default_use_viewer_window() -> bool {
    true
}

fn default_include_subfolders() -> bool {
    true
}

/// Full snapshot of user preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub folders: Vec<PathBuf>,
    #[serde(default)]
    pub play_order: PlayOrder,
    #[serde(default)]
    pub always_on_top: bool,
    #[serde(default = "default_use_viewer_window")]
    pub use_viewer_window: bool,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default = "default_include_subfolders")]
    pub include_subfolders: bool,
    #[serde(default)]
    pub viewer_geometry: ViewerGeometry,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            play_order: PlayOrder::default(),
            always_on_top: false,
            use_viewer_window: true,
            interval: DEFAULT_INTERVAL_SECS,
            include_subfolders: true,
            viewer_geometry: ViewerGeometry::default(),
        }
    }
}

/// Reads and writes the settings snapshot at a fixed per-user location.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store under the platform config directory.
    pub fn default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join("slide-album").join("settings.json"),
        }
    }

    /// Store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the snapshot, falling back to defaults on any read or parse
    /// error. Folders that do not exist on disk are dropped; the interval is
    /// clamped to its documented bounds.
    pub fn load(&self) -> Settings {
        let mut settings = match fs::read_to_string(&self.path) {
            Ok(text) => match serde_json::from_str::<Settings>(&text) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(
                        "Ignoring malformed settings file {}: {}",
                        self.path.display(),
                        err
                    );
                    Settings::default()
                }
            },
            Err(err) => {
                debug!(
                    "No settings loaded from {}: {}",
                    self.path.display(),
                    err
                );
                Settings::default()
            }
        };

        settings.interval = settings.interval.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS);

        let before = settings.folders.len();
        settings.folders.retain(|folder| folder.is_dir());
        if settings.folders.len() < before {
            warn!(
                "Dropped {} missing folder(s) from settings",
                before - settings.folders.len()
            );
        }

        settings
    }

    /// Writes a full snapshot. Failures are logged and leave any previous
    /// file untouched.
    pub fn save(&self, settings: &Settings) {
        if let Err(err) = self.try_save(settings) {
            warn!("Failed to save settings to {}: {}", self.path.display(), err);
        }
    }

    fn try_save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::Settings(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| AppError::Settings(e.to_string()))?;

        // Write to a sibling temp file, then rename over the real one.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| AppError::Settings(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| AppError::Settings(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::at(dir.path().join("settings.json"))
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load(), Settings::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("settings.json"), "{not json").unwrap();
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("photos");
        fs::create_dir(&folder).unwrap();

        let store = store_in(&dir);
        let settings = Settings {
            folders: vec![folder],
            play_order: PlayOrder::Random,
            always_on_top: true,
            use_viewer_window: false,
            interval: 42,
            include_subfolders: false,
            viewer_geometry: ViewerGeometry {
                x: -10,
                y: 20,
                width: 640,
                height: 480,
            },
        };

        store.save(&settings);
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn nonexistent_folders_are_dropped_on_load_only() {
        let dir = tempfile::tempdir().unwrap();
        let live = dir.path().join("live");
        fs::create_dir(&live).unwrap();

        let store = store_in(&dir);
        let mut settings = Settings::default();
        settings.folders = vec![live.clone(), dir.path().join("vanished")];
        settings.interval = 9;
        store.save(&settings);

        let loaded = store.load();
        assert_eq!(loaded.folders, vec![live]);
        assert_eq!(loaded.interval, 9);
    }

    #[test]
    fn missing_keys_take_defaults_and_unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            dir.path().join("settings.json"),
            r#"{"interval": 12, "theme": "dark"}"#,
        )
        .unwrap();

        let loaded = store.load();
        assert_eq!(loaded.interval, 12);
        assert_eq!(loaded.play_order, PlayOrder::Sequential);
        assert!(loaded.use_viewer_window);
        assert!(loaded.include_subfolders);
        assert_eq!(loaded.viewer_geometry, ViewerGeometry::default());
    }

    #[test]
    fn out_of_range_interval_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(dir.path().join("settings.json"), r#"{"interval": 0}"#).unwrap();
        assert_eq!(store.load().interval, MIN_INTERVAL_SECS);

        fs::write(dir.path().join("settings.json"), r#"{"interval": 900}"#).unwrap();
        assert_eq!(store.load().interval, MAX_INTERVAL_SECS);
    }

    #[test]
    fn play_order_uses_variant_names_on_the_wire() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            dir.path().join("settings.json"),
            r#"{"play_order": "Reverse"}"#,
        )
        .unwrap();
        assert_eq!(store.load().play_order, PlayOrder::Reverse);
    }
}
