//! Tiles sliced from a tile source

use serde::{Deserialize, Serialize};

/// A single tile of a tile source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    /// Zero-based row-major index within the source image
    pub index: u32,
    /// Collision group label, empty when the tile has none
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub collision_group: String,
}

impl Tile {
    /// Create a tile without a collision group
    pub fn new(index: u32) -> Self {
        Self {
            index,
            collision_group: String::new(),
        }
    }

    /// Check if the tile belongs to a collision group
    pub fn has_collision_group(&self) -> bool {
        !self.collision_group.is_empty()
    }
}

/// Build `count` tiles with default attributes
pub fn default_tiles(count: u32) -> Vec<Tile> {
    (0..count).map(Tile::new).collect()
}
