//! Editing session for one tile source
//!
//! A [`MapSession`] owns the loaded record, the tiles sliced from it and the
//! current tile selection. Every change is mirrored to a [`MapObserver`].
//! Sessions are single-threaded; share one behind a single lock if needed.

use crate::{MapObserver, SelectionSet};
use tile_map_core::{
    checked_dimension, default_tiles, CollisionVocabulary, GridConfig, MapError, MapField,
    MapRecord, Tile,
};
use tracing::{debug, info};

/// Model state, present once a record is loaded
#[derive(Debug, Clone)]
struct MapModel {
    image: String,
    collision: String,
    material_tag: String,
    grid: GridConfig,
    row_width: RowWidth,
    tiles: Vec<Tile>,
    selection: SelectionSet,
}

/// Where the row width of the grid comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowWidth {
    /// Given by the record or by a caller; persisted
    Fixed,
    /// Sliced from the pixel width of the source image
    Image { width: u32 },
    /// Most square layout for the tile count
    Square,
}

impl MapModel {
    /// Recompute a derived row width after a geometry change
    fn refresh_row_width(&mut self) {
        match self.row_width {
            RowWidth::Fixed => {}
            RowWidth::Image { width } => {
                self.grid.tiles_per_row = self.grid.tiles_per_row_for_width(width);
            }
            RowWidth::Square => {
                self.grid.tiles_per_row = GridConfig::square_tiles_per_row(self.grid.tile_count);
            }
        }
    }

    fn notify_field<O: MapObserver>(&self, observer: &mut O, field: MapField) {
        match field {
            MapField::Image => observer.set_image(&self.image),
            MapField::TileWidth => observer.set_tile_width(self.grid.tile_width),
            MapField::TileHeight => observer.set_tile_height(self.grid.tile_height),
            MapField::TileCount => observer.set_tile_count(self.grid.tile_count),
            MapField::TileMargin => observer.set_tile_margin(self.grid.tile_margin),
            MapField::TileSpacing => observer.set_tile_spacing(self.grid.tile_spacing),
            MapField::Collision => observer.set_collision(&self.collision),
            MapField::MaterialTag => observer.set_material_tag(&self.material_tag),
            MapField::TilesPerRow | MapField::CollisionGroup => {}
        }
    }

    fn resize_tiles(&mut self, tile_count: u32) {
        let count = tile_count as usize;
        if count < self.tiles.len() {
            self.tiles.truncate(count);
        } else {
            let start = self.tiles.len() as u32;
            self.tiles.extend((start..tile_count).map(Tile::new));
        }
    }
}

fn loaded(model: &Option<MapModel>) -> Result<&MapModel, MapError> {
    model.as_ref().ok_or(MapError::NotLoaded)
}

fn loaded_mut(model: &mut Option<MapModel>) -> Result<&mut MapModel, MapError> {
    model.as_mut().ok_or(MapError::NotLoaded)
}

fn record_int(field: MapField, value: u32) -> Result<i32, MapError> {
    i32::try_from(value)
        .map_err(|_| MapError::invalid(field, format!("{} does not fit in a map record", value)))
}

/// Tile selection and property editing for one tile source
///
/// # Example
///
/// ```rust
/// use tile_map_editor::MapSession;
/// use tile_map_editor::tile_map_core::MapRecord;
///
/// let mut session = MapSession::new(());
/// session
///     .load(&MapRecord {
///         tile_width: 16,
///         tile_height: 16,
///         tile_count: 4,
///         ..Default::default()
///     })
///     .unwrap();
///
/// session.select_tile(1, 1).unwrap();
/// session.set_selected_tiles_collision_group("obstruction").unwrap();
/// assert_eq!(session.tile(3).unwrap().unwrap().collision_group, "obstruction");
/// ```
#[derive(Debug)]
pub struct MapSession<O> {
    observer: O,
    vocabulary: CollisionVocabulary,
    model: Option<MapModel>,
}

impl<O: MapObserver> MapSession<O> {
    /// Create an unloaded session accepting any collision group
    pub fn new(observer: O) -> Self {
        Self::with_vocabulary(observer, CollisionVocabulary::Unrestricted)
    }

    /// Create an unloaded session restricted to a collision group vocabulary
    pub fn with_vocabulary(observer: O, vocabulary: CollisionVocabulary) -> Self {
        Self {
            observer,
            vocabulary,
            model: None,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn vocabulary(&self) -> &CollisionVocabulary {
        &self.vocabulary
    }

    /// Replace the collision group vocabulary; existing labels are kept
    pub fn set_vocabulary(&mut self, vocabulary: CollisionVocabulary) {
        self.vocabulary = vocabulary;
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Load a record, replacing all tiles and clearing the selection
    ///
    /// The record is validated before anything changes. The view receives one
    /// notification per field; the cleared selection is not notified.
    pub fn load(&mut self, record: &MapRecord) -> Result<(), MapError> {
        let grid = record.grid_config()?;

        let model = self.model.insert(MapModel {
            image: record.image.clone(),
            collision: record.collision.clone(),
            material_tag: record.material_tag.clone(),
            grid,
            row_width: if record.tiles_per_row.is_some() {
                RowWidth::Fixed
            } else {
                RowWidth::Square
            },
            tiles: default_tiles(grid.tile_count),
            selection: SelectionSet::new(),
        });

        info!(
            "Loaded tile source '{}': {} tiles of {}x{}, {} per row",
            model.image,
            grid.tile_count,
            grid.tile_width,
            grid.tile_height,
            grid.tiles_per_row
        );

        for &field in MapField::notified() {
            model.notify_field(&mut self.observer, field);
        }
        Ok(())
    }

    /// Export the current state as a record for persistence
    ///
    /// Only a fixed row width is written; one sliced from the image or laid
    /// out from the tile count is derived again on the next load.
    pub fn to_record(&self) -> Result<MapRecord, MapError> {
        let model = loaded(&self.model)?;
        let grid = &model.grid;
        Ok(MapRecord {
            image: model.image.clone(),
            tile_width: record_int(MapField::TileWidth, grid.tile_width)?,
            tile_height: record_int(MapField::TileHeight, grid.tile_height)?,
            tile_count: record_int(MapField::TileCount, grid.tile_count)?,
            tile_spacing: record_int(MapField::TileSpacing, grid.tile_spacing)?,
            tile_margin: record_int(MapField::TileMargin, grid.tile_margin)?,
            collision: model.collision.clone(),
            material_tag: model.material_tag.clone(),
            tiles_per_row: match model.row_width {
                RowWidth::Fixed => Some(record_int(MapField::TilesPerRow, grid.tiles_per_row)?),
                RowWidth::Image { .. } | RowWidth::Square => None,
            },
        })
    }

    // Field setters

    pub fn set_image(&mut self, image: impl Into<String>) -> Result<(), MapError> {
        let model = loaded_mut(&mut self.model)?;
        model.image = image.into();
        self.observer.set_image(&model.image);
        Ok(())
    }

    pub fn set_tile_width(&mut self, width: i32) -> Result<(), MapError> {
        let model = loaded_mut(&mut self.model)?;
        model.grid.tile_width = checked_dimension(MapField::TileWidth, width)?;
        model.refresh_row_width();
        self.observer.set_tile_width(model.grid.tile_width);
        Ok(())
    }

    pub fn set_tile_height(&mut self, height: i32) -> Result<(), MapError> {
        let model = loaded_mut(&mut self.model)?;
        model.grid.tile_height = checked_dimension(MapField::TileHeight, height)?;
        self.observer.set_tile_height(model.grid.tile_height);
        Ok(())
    }

    /// Change the tile count
    ///
    /// Surviving tiles keep their collision groups. Selected tiles past the new
    /// count are deselected, which notifies the view of the new selection.
    pub fn set_tile_count(&mut self, count: i32) -> Result<(), MapError> {
        let model = loaded_mut(&mut self.model)?;
        let count = checked_dimension(MapField::TileCount, count)?;

        model.grid.tile_count = count;
        model.refresh_row_width();
        model.resize_tiles(count);
        let selection_changed = model.selection.retain_below(count);

        self.observer.set_tile_count(count);
        if selection_changed {
            self.observer.set_selected_tiles(&model.selection);
        }
        Ok(())
    }

    pub fn set_tile_margin(&mut self, margin: i32) -> Result<(), MapError> {
        let model = loaded_mut(&mut self.model)?;
        model.grid.tile_margin = checked_dimension(MapField::TileMargin, margin)?;
        model.refresh_row_width();
        self.observer.set_tile_margin(model.grid.tile_margin);
        Ok(())
    }

    pub fn set_tile_spacing(&mut self, spacing: i32) -> Result<(), MapError> {
        let model = loaded_mut(&mut self.model)?;
        model.grid.tile_spacing = checked_dimension(MapField::TileSpacing, spacing)?;
        model.refresh_row_width();
        self.observer.set_tile_spacing(model.grid.tile_spacing);
        Ok(())
    }

    pub fn set_collision(&mut self, collision: impl Into<String>) -> Result<(), MapError> {
        let model = loaded_mut(&mut self.model)?;
        model.collision = collision.into();
        self.observer.set_collision(&model.collision);
        Ok(())
    }

    pub fn set_material_tag(&mut self, material_tag: impl Into<String>) -> Result<(), MapError> {
        let model = loaded_mut(&mut self.model)?;
        model.material_tag = material_tag.into();
        self.observer.set_material_tag(&model.material_tag);
        Ok(())
    }

    /// Set the row width of the tile grid; not forwarded to the view
    pub fn set_tiles_per_row(&mut self, tiles_per_row: i32) -> Result<(), MapError> {
        let model = loaded_mut(&mut self.model)?;
        model.grid.tiles_per_row = checked_dimension(MapField::TilesPerRow, tiles_per_row)?;
        model.row_width = RowWidth::Fixed;
        Ok(())
    }

    /// Derive the row width from the pixel size of the source image
    ///
    /// The row width follows later changes to tile width, margin and spacing
    /// until a caller fixes it with [`set_tiles_per_row`](Self::set_tiles_per_row).
    pub fn set_image_size(&mut self, width: u32, height: u32) -> Result<(), MapError> {
        let model = loaded_mut(&mut self.model)?;
        model.grid.check_image_size(width, height)?;
        model.row_width = RowWidth::Image { width };
        model.refresh_row_width();
        debug!(
            "Image {}x{} holds {} tiles per row",
            width, height, model.grid.tiles_per_row
        );
        Ok(())
    }

    // Selection

    /// Select the tile at (column, row), replacing the current selection
    ///
    /// Coordinates outside the grid are ignored: the selection stays as it is,
    /// the view is not notified and `Ok(None)` is returned.
    pub fn select_tile(&mut self, column: i32, row: i32) -> Result<Option<u32>, MapError> {
        let model = loaded_mut(&mut self.model)?;
        let Some(index) = model.grid.index_of(column, row) else {
            debug!("Ignoring selection outside the tile grid at ({}, {})", column, row);
            return Ok(None);
        };

        model.selection.select_only(index);
        self.observer.set_selected_tiles(&model.selection);
        Ok(Some(index))
    }

    /// Assign a collision group to every selected tile, returning the number of tiles updated
    ///
    /// The view is not notified; read the tiles back to observe the change.
    pub fn set_selected_tiles_collision_group(&mut self, label: &str) -> Result<usize, MapError> {
        let model = loaded_mut(&mut self.model)?;
        self.vocabulary.check(label)?;

        let mut updated = 0;
        for index in model.selection.iter() {
            if let Some(tile) = model.tiles.get_mut(index as usize) {
                tile.collision_group = label.to_string();
                updated += 1;
            }
        }
        Ok(updated)
    }

    // Queries

    pub fn image(&self) -> Result<&str, MapError> {
        Ok(&loaded(&self.model)?.image)
    }

    pub fn tile_width(&self) -> Result<u32, MapError> {
        Ok(loaded(&self.model)?.grid.tile_width)
    }

    pub fn tile_height(&self) -> Result<u32, MapError> {
        Ok(loaded(&self.model)?.grid.tile_height)
    }

    pub fn tile_count(&self) -> Result<u32, MapError> {
        Ok(loaded(&self.model)?.grid.tile_count)
    }

    pub fn tile_margin(&self) -> Result<u32, MapError> {
        Ok(loaded(&self.model)?.grid.tile_margin)
    }

    pub fn tile_spacing(&self) -> Result<u32, MapError> {
        Ok(loaded(&self.model)?.grid.tile_spacing)
    }

    pub fn collision(&self) -> Result<&str, MapError> {
        Ok(&loaded(&self.model)?.collision)
    }

    pub fn material_tag(&self) -> Result<&str, MapError> {
        Ok(&loaded(&self.model)?.material_tag)
    }

    pub fn tiles_per_row(&self) -> Result<u32, MapError> {
        Ok(loaded(&self.model)?.grid.tiles_per_row)
    }

    pub fn grid(&self) -> Result<&GridConfig, MapError> {
        Ok(&loaded(&self.model)?.grid)
    }

    pub fn tiles(&self) -> Result<&[Tile], MapError> {
        Ok(&loaded(&self.model)?.tiles)
    }

    /// Get a tile by index (None past the tile count)
    pub fn tile(&self, index: u32) -> Result<Option<&Tile>, MapError> {
        Ok(loaded(&self.model)?.tiles.get(index as usize))
    }

    pub fn selection(&self) -> Result<&SelectionSet, MapError> {
        Ok(&loaded(&self.model)?.selection)
    }

    /// The selected tiles in index order
    pub fn selected_tiles(&self) -> Result<impl Iterator<Item = &Tile> + '_, MapError> {
        let model = loaded(&self.model)?;
        Ok(model
            .selection
            .iter()
            .filter_map(move |index| model.tiles.get(index as usize)))
    }

    /// Deselect everything, notifying the view if the selection was not empty
    pub fn clear_selection(&mut self) -> Result<(), MapError> {
        let model = loaded_mut(&mut self.model)?;
        if !model.selection.is_empty() {
            model.selection.clear();
            self.observer.set_selected_tiles(&model.selection);
        }
        Ok(())
    }
}
