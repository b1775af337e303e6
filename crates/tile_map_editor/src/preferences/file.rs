//! Preferences file save/load operations

use super::EditorPreferences;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl EditorPreferences {
    /// Get the config directory path for the editor
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "tile_map_editor", "tile_map_editor")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the preferences file path
    pub fn preferences_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(PREFERENCES_FILE))
    }

    /// Load preferences from the config directory, returning defaults on failure
    pub fn load() -> Self {
        let loaded = Self::preferences_path()
            .ok_or(PreferencesError::NoConfigDir)
            .and_then(|path| Self::load_from(&path));
        match loaded {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("Could not load preferences: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Load preferences from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self, PreferencesError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(PreferencesError::Parse)
    }

    /// Save preferences to the config directory
    pub fn save(&self) -> Result<(), PreferencesError> {
        let path = Self::preferences_path().ok_or(PreferencesError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save preferences to a file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(PreferencesError::Serialize)?;
        std::fs::write(path, content)?;

        info!("Saved preferences to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = EditorPreferences::load_from(&dir.path().join(PREFERENCES_FILE)).unwrap();
        assert_eq!(prefs, EditorPreferences::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);

        let mut prefs = EditorPreferences::default();
        prefs.collision_groups = vec!["obstruction".to_string()];
        prefs.auto_open_last_map = true;
        prefs.add_recent_map("mario.map.json".to_string(), "mario".to_string());
        prefs.save_to(&path).unwrap();

        assert_eq!(EditorPreferences::load_from(&path).unwrap(), prefs);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, r#"{ "collision_groups": ["hazard"] }"#).unwrap();

        let prefs = EditorPreferences::load_from(&path).unwrap();
        assert_eq!(prefs.collision_groups, vec!["hazard".to_string()]);
        assert_eq!(prefs.default_material_tag, "tile");
        assert!(prefs.recent_maps.is_empty());
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(
            EditorPreferences::load_from(&path),
            Err(PreferencesError::Parse(_))
        ));
    }
}
