//! Identifiers for the editable fields of a tile source

use crate::MapError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An editable field of a tile source
///
/// The order of [`MapField::notified`] is the order in which a freshly loaded
/// record is forwarded to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapField {
    Image,
    TileWidth,
    TileHeight,
    TileCount,
    TileMargin,
    TileSpacing,
    Collision,
    MaterialTag,
    /// Row width of the tile grid, supplied by whoever knows the image size
    TilesPerRow,
    /// Collision group label of a tile
    CollisionGroup,
}

impl MapField {
    /// Get display name for UI and error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            MapField::Image => "image",
            MapField::TileWidth => "tile width",
            MapField::TileHeight => "tile height",
            MapField::TileCount => "tile count",
            MapField::TileMargin => "tile margin",
            MapField::TileSpacing => "tile spacing",
            MapField::Collision => "collision source",
            MapField::MaterialTag => "material tag",
            MapField::TilesPerRow => "tiles per row",
            MapField::CollisionGroup => "collision group",
        }
    }

    /// Fields forwarded to the view on load, in notification order
    pub fn notified() -> &'static [MapField] {
        &[
            MapField::Image,
            MapField::TileWidth,
            MapField::TileHeight,
            MapField::TileCount,
            MapField::TileMargin,
            MapField::TileSpacing,
            MapField::Collision,
            MapField::MaterialTag,
        ]
    }
}

impl fmt::Display for MapField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Validate a dimension, count, margin or spacing value (must be non-negative)
pub fn checked_dimension(field: MapField, value: i32) -> Result<u32, MapError> {
    u32::try_from(value).map_err(|_| MapError::invalid(field, format!("{} is negative", value)))
}
