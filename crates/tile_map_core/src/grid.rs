//! Grid configuration: how a source image is sliced into tiles
//!
//! Margin is the border kept around every tile and spacing the gap between
//! neighbouring tiles, so two adjacent tiles are `tile_width + 2 * margin + spacing`
//! pixels apart horizontally.

use crate::{MapError, MapField};
use serde::{Deserialize, Serialize};

/// Validated slicing parameters of a tile source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridConfig {
    pub tile_width: u32,
    pub tile_height: u32,
    /// Total number of tiles; bounds which indices are valid
    pub tile_count: u32,
    pub tile_margin: u32,
    pub tile_spacing: u32,
    /// Number of tiles in one row of the source image
    pub tiles_per_row: u32,
}

impl GridConfig {
    /// Most square row width able to hold `tile_count` tiles
    ///
    /// Used when nothing is known about the source image.
    pub fn square_tiles_per_row(tile_count: u32) -> u32 {
        let mut side: u32 = 0;
        while u64::from(side) * u64::from(side) < u64::from(tile_count) {
            side += 1;
        }
        side
    }

    /// Horizontal distance in pixels between the origins of two adjacent tiles
    pub fn stride_x(&self) -> u32 {
        self.tile_width
            .saturating_add(self.tile_margin.saturating_mul(2))
            .saturating_add(self.tile_spacing)
    }

    /// Number of whole tiles fitting in an image row of `image_width` pixels
    pub fn tiles_per_row_for_width(&self, image_width: u32) -> u32 {
        let stride = self.stride_x();
        if stride == 0 {
            return 0;
        }
        image_width.saturating_add(self.tile_spacing) / stride
    }

    /// Check that an image can hold at least one tile
    pub fn check_image_size(&self, width: u32, height: u32) -> Result<(), MapError> {
        if width < self.tile_width || height < self.tile_height {
            return Err(MapError::invalid(
                MapField::Image,
                format!(
                    "image {}x{} is smaller than a {}x{} tile",
                    width, height, self.tile_width, self.tile_height
                ),
            ));
        }
        Ok(())
    }

    /// Linear index of the tile at (column, row), or None outside the grid
    pub fn index_of(&self, column: i32, row: i32) -> Option<u32> {
        if column < 0 || row < 0 || self.tiles_per_row == 0 {
            return None;
        }
        let index = i64::from(row) * i64::from(self.tiles_per_row) + i64::from(column);
        if index < i64::from(self.tile_count) {
            u32::try_from(index).ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mario_grid() -> GridConfig {
        GridConfig {
            tile_width: 16,
            tile_height: 32,
            tile_count: 4,
            tile_margin: 1,
            tile_spacing: 2,
            tiles_per_row: 2,
        }
    }

    #[test]
    fn test_square_tiles_per_row() {
        assert_eq!(GridConfig::square_tiles_per_row(0), 0);
        assert_eq!(GridConfig::square_tiles_per_row(1), 1);
        assert_eq!(GridConfig::square_tiles_per_row(4), 2);
        assert_eq!(GridConfig::square_tiles_per_row(5), 3);
        assert_eq!(GridConfig::square_tiles_per_row(9), 3);
        assert_eq!(GridConfig::square_tiles_per_row(10), 4);
    }

    #[test]
    fn test_index_of() {
        let grid = mario_grid();
        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(1, 0), Some(1));
        assert_eq!(grid.index_of(0, 1), Some(2));
        assert_eq!(grid.index_of(1, 1), Some(3));

        // Past the last tile
        assert_eq!(grid.index_of(0, 2), None);
        assert_eq!(grid.index_of(4, 0), None);

        // Negative coordinates never map to a tile
        assert_eq!(grid.index_of(-1, 1), None);
        assert_eq!(grid.index_of(1, -1), None);
    }

    #[test]
    fn test_index_of_empty_row() {
        let grid = GridConfig {
            tile_count: 4,
            tiles_per_row: 0,
            ..Default::default()
        };
        assert_eq!(grid.index_of(0, 0), None);
    }

    #[test]
    fn test_stride_x() {
        let grid = mario_grid();
        // Margin on both sides of the tile plus the spacing
        assert_eq!(grid.stride_x(), 20);
        assert_eq!(GridConfig::default().stride_x(), 0);
    }

    #[test]
    fn test_tiles_per_row_for_width() {
        let grid = mario_grid();
        // Two tiles: 1 + 16 + 1, 2, 1 + 16 + 1
        assert_eq!(grid.tiles_per_row_for_width(38), 2);
        assert_eq!(grid.tiles_per_row_for_width(37), 1);
        assert_eq!(grid.tiles_per_row_for_width(0), 0);

        assert_eq!(GridConfig::default().tiles_per_row_for_width(128), 0);
    }

    #[test]
    fn test_check_image_size() {
        let grid = mario_grid();
        assert!(grid.check_image_size(16, 32).is_ok());
        assert!(grid.check_image_size(256, 256).is_ok());

        let err = grid.check_image_size(8, 64).unwrap_err();
        assert_eq!(err.field(), Some(MapField::Image));
    }
}
