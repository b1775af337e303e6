//! Map record - the persisted description of a tile source
//!
//! Integer fields are signed so that hand-edited or foreign records carrying
//! negative values deserialize and are then rejected by validation, instead of
//! failing deep inside the JSON parser.

use crate::{checked_dimension, GridConfig, MapError, MapField};
use serde::{Deserialize, Serialize};

/// Material tag given to new tile sources
pub const DEFAULT_MATERIAL_TAG: &str = "tile";

/// A tile source record as produced by persistence
///
/// # Example JSON
/// ```json
/// {
///   "image": "tiles/mario.png",
///   "tile_width": 16,
///   "tile_height": 16,
///   "tile_count": 64,
///   "tile_spacing": 0,
///   "tile_margin": 0,
///   "collision": "tiles/mario_collision.png",
///   "material_tag": "tile"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(bevy::asset::Asset, bevy::reflect::TypePath))]
pub struct MapRecord {
    /// Path of the source image
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tile_width: i32,
    #[serde(default)]
    pub tile_height: i32,
    #[serde(default)]
    pub tile_count: i32,
    #[serde(default)]
    pub tile_spacing: i32,
    #[serde(default)]
    pub tile_margin: i32,
    /// Path of the image the collision shapes are traced from
    #[serde(default)]
    pub collision: String,
    #[serde(default = "default_material_tag")]
    pub material_tag: String,
    /// Row width of the tile grid when known without reading the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiles_per_row: Option<i32>,
}

fn default_material_tag() -> String {
    DEFAULT_MATERIAL_TAG.to_string()
}

impl Default for MapRecord {
    fn default() -> Self {
        Self {
            image: String::new(),
            tile_width: 0,
            tile_height: 0,
            tile_count: 0,
            tile_spacing: 0,
            tile_margin: 0,
            collision: String::new(),
            material_tag: default_material_tag(),
            tiles_per_row: None,
        }
    }
}

impl MapRecord {
    /// Create an empty record using the given material tag
    pub fn new(material_tag: impl Into<String>) -> Self {
        Self {
            material_tag: material_tag.into(),
            ..Default::default()
        }
    }

    /// Validate the numeric fields and build the grid configuration
    ///
    /// Without an explicit `tiles_per_row` the grid uses the most square
    /// layout holding `tile_count` tiles.
    pub fn grid_config(&self) -> Result<GridConfig, MapError> {
        let tile_width = checked_dimension(MapField::TileWidth, self.tile_width)?;
        let tile_height = checked_dimension(MapField::TileHeight, self.tile_height)?;
        let tile_count = checked_dimension(MapField::TileCount, self.tile_count)?;
        let tile_margin = checked_dimension(MapField::TileMargin, self.tile_margin)?;
        let tile_spacing = checked_dimension(MapField::TileSpacing, self.tile_spacing)?;
        let tiles_per_row = match self.tiles_per_row {
            Some(value) => checked_dimension(MapField::TilesPerRow, value)?,
            None => GridConfig::square_tiles_per_row(tile_count),
        };

        Ok(GridConfig {
            tile_width,
            tile_height,
            tile_count,
            tile_margin,
            tile_spacing,
            tiles_per_row,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = MapRecord::default();
        assert_eq!(record.material_tag, "tile");
        assert!(record.image.is_empty());
        assert_eq!(record.tiles_per_row, None);

        let record = MapRecord::new("ground");
        assert_eq!(record.material_tag, "ground");
    }

    #[test]
    fn test_grid_config() {
        let record = MapRecord {
            tile_width: 16,
            tile_height: 32,
            tile_count: 4,
            tile_margin: 1,
            tile_spacing: 2,
            ..Default::default()
        };
        let grid = record.grid_config().unwrap();
        assert_eq!(grid.tile_width, 16);
        assert_eq!(grid.tile_height, 32);
        assert_eq!(grid.tile_count, 4);
        assert_eq!(grid.tile_margin, 1);
        assert_eq!(grid.tile_spacing, 2);
        assert_eq!(grid.tiles_per_row, 2);

        let record = MapRecord {
            tile_count: 4,
            tiles_per_row: Some(4),
            ..Default::default()
        };
        assert_eq!(record.grid_config().unwrap().tiles_per_row, 4);
    }

    #[test]
    fn test_grid_config_rejects_negative() {
        let record = MapRecord {
            tile_height: -32,
            ..Default::default()
        };
        let err = record.grid_config().unwrap_err();
        assert_eq!(err.field(), Some(MapField::TileHeight));

        let record = MapRecord {
            tiles_per_row: Some(-1),
            ..Default::default()
        };
        let err = record.grid_config().unwrap_err();
        assert_eq!(err.field(), Some(MapField::TilesPerRow));
    }

    #[test]
    fn test_json_defaults() {
        let record: MapRecord = serde_json::from_str(r#"{ "image": "mario.png" }"#).unwrap();
        assert_eq!(record.image, "mario.png");
        assert_eq!(record.material_tag, "tile");
        assert_eq!(record.tile_count, 0);

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("tiles_per_row"));
    }
}
