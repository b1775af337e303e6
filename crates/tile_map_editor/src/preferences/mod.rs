//! Editor preferences
//!
//! Persisted per user in the platform config directory.

mod file;

pub use file::*;

use crate::project::{self, ProjectError};
use crate::{MapObserver, MapSession};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tile_map_core::{CollisionVocabulary, MapRecord, DEFAULT_MATERIAL_TAG};
use tracing::{info, warn};

/// Maximum number of entries kept in the recent maps list
pub const MAX_RECENT_MAPS: usize = 10;

/// A recently opened map file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentMap {
    pub path: String,
    pub name: String,
}

/// User preferences for the tile source editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorPreferences {
    /// Collision groups offered for tiles; empty accepts any label
    pub collision_groups: Vec<String>,
    /// Material tag given to new tile sources
    pub default_material_tag: String,
    /// Most recent first
    pub recent_maps: Vec<RecentMap>,
    /// Reopen the most recent map on startup
    pub auto_open_last_map: bool,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            collision_groups: Vec::new(),
            default_material_tag: DEFAULT_MATERIAL_TAG.to_string(),
            recent_maps: Vec::new(),
            auto_open_last_map: false,
        }
    }
}

impl EditorPreferences {
    /// The collision group vocabulary these preferences describe
    pub fn vocabulary(&self) -> CollisionVocabulary {
        if self.collision_groups.is_empty() {
            CollisionVocabulary::Unrestricted
        } else {
            CollisionVocabulary::only(self.collision_groups.iter().cloned())
        }
    }

    /// Start an editing session honoring the collision group vocabulary
    pub fn new_session<O: MapObserver>(&self, observer: O) -> MapSession<O> {
        MapSession::with_vocabulary(observer, self.vocabulary())
    }

    /// An empty record for a new tile source
    pub fn new_record(&self) -> MapRecord {
        MapRecord::new(self.default_material_tag.clone())
    }

    /// Move a map to the front of the recent list
    pub fn add_recent_map(&mut self, path: String, name: String) {
        self.recent_maps.retain(|recent| recent.path != path);
        self.recent_maps.insert(0, RecentMap { path, name });
        self.recent_maps.truncate(MAX_RECENT_MAPS);
    }

    /// The most recently opened map
    pub fn last_map(&self) -> Option<&RecentMap> {
        self.recent_maps.first()
    }

    /// Open a map file into a session and remember it as the most recent map
    pub fn open_map<O: MapObserver>(
        &mut self,
        session: &mut MapSession<O>,
        path: &Path,
    ) -> Result<MapRecord, ProjectError> {
        let record = project::open_map(session, path)?;
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .and_then(|s| s.split('.').next())
            .unwrap_or_default()
            .to_string();
        self.add_recent_map(path.to_string_lossy().to_string(), name);
        Ok(record)
    }

    /// Reopen the most recent map if enabled; failures are logged and skipped
    pub fn reopen_last_map<O: MapObserver>(
        &mut self,
        session: &mut MapSession<O>,
    ) -> Option<MapRecord> {
        if !self.auto_open_last_map {
            return None;
        }

        let recent = self.last_map()?.clone();
        let path = Path::new(&recent.path);
        if !path.exists() {
            warn!("Last map file not found: {} ({})", recent.name, recent.path);
            return None;
        }

        match self.open_map(session, path) {
            Ok(record) => {
                info!("Auto-opened last map: {}", recent.name);
                Some(record)
            }
            Err(e) => {
                warn!("Failed to auto-open map '{}': {}", recent.name, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary() {
        let mut prefs = EditorPreferences::default();
        assert_eq!(prefs.vocabulary(), CollisionVocabulary::Unrestricted);

        prefs.collision_groups = vec!["obstruction".to_string(), "hazard".to_string()];
        let vocabulary = prefs.vocabulary();
        assert!(vocabulary.accepts("hazard"));
        assert!(!vocabulary.accepts("water"));

        let mut session = prefs.new_session(());
        session.load(&prefs.new_record()).unwrap();
        session.set_tile_count(1).unwrap();
        session.select_tile(0, 0).unwrap();
        assert!(session.set_selected_tiles_collision_group("water").is_err());
        assert_eq!(session.material_tag().unwrap(), "tile");
    }

    #[test]
    fn test_recent_maps() {
        let mut prefs = EditorPreferences::default();
        assert!(prefs.last_map().is_none());

        prefs.add_recent_map("a.map.json".to_string(), "a".to_string());
        prefs.add_recent_map("b.map.json".to_string(), "b".to_string());
        prefs.add_recent_map("a.map.json".to_string(), "a".to_string());

        assert_eq!(prefs.recent_maps.len(), 2);
        assert_eq!(prefs.last_map().map(|m| m.name.as_str()), Some("a"));

        for i in 0..20 {
            prefs.add_recent_map(format!("{}.map.json", i), i.to_string());
        }
        assert_eq!(prefs.recent_maps.len(), MAX_RECENT_MAPS);
        assert_eq!(prefs.last_map().map(|m| m.name.as_str()), Some("19"));
    }

    fn write_map(dir: &Path, file_name: &str) -> std::path::PathBuf {
        let path = dir.join(file_name);
        let record = MapRecord {
            tile_width: 16,
            tile_height: 16,
            tile_count: 4,
            ..Default::default()
        };
        project::save_record(&record, &path).unwrap();
        path
    }

    #[test]
    fn test_open_map_records_recent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_map(dir.path(), "castle.map.json");

        let mut prefs = EditorPreferences::default();
        let mut session = prefs.new_session(());
        prefs.open_map(&mut session, &path).unwrap();

        assert!(session.is_loaded());
        let last = prefs.last_map().unwrap();
        assert_eq!(last.name, "castle");
        assert_eq!(last.path, path.to_string_lossy());

        // A failed open leaves the recent list alone
        assert!(prefs
            .open_map(&mut session, &dir.path().join("missing.map.json"))
            .is_err());
        assert_eq!(prefs.recent_maps.len(), 1);
    }

    #[test]
    fn test_reopen_last_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_map(dir.path(), "castle.map.json");

        let mut prefs = EditorPreferences::default();
        prefs.add_recent_map(path.to_string_lossy().to_string(), "castle".to_string());

        let mut session = prefs.new_session(());
        assert!(prefs.reopen_last_map(&mut session).is_none());
        assert!(!session.is_loaded());

        prefs.auto_open_last_map = true;
        let record = prefs.reopen_last_map(&mut session).unwrap();
        assert_eq!(record.tile_count, 4);
        assert_eq!(session.tile_count().unwrap(), 4);

        // Missing files are skipped
        prefs.add_recent_map(
            dir.path().join("gone.map.json").to_string_lossy().to_string(),
            "gone".to_string(),
        );
        let mut session = prefs.new_session(());
        assert!(prefs.reopen_last_map(&mut session).is_none());
        assert!(!session.is_loaded());
    }
}
