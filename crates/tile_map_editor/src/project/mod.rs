//! Map record files on disk
//!
//! Records are stored as JSON. When a record does not say how many tiles one
//! row holds, the row width is read from the source image, which is resolved
//! relative to the record's directory.

mod file;

pub use file::*;

use crate::{MapObserver, MapSession};
use std::path::{Path, PathBuf};
use tile_map_core::MapRecord;
use tracing::{info, warn};

/// Resolve an image path stored in a record against the record's location
pub fn resolve_image_path(record_path: &Path, image: &str) -> PathBuf {
    let image = Path::new(image);
    if image.is_absolute() {
        return image.to_path_buf();
    }
    record_path
        .parent()
        .map(|dir| dir.join(image))
        .unwrap_or_else(|| image.to_path_buf())
}

/// Probe the image of a record for its pixel size, if it can be found
fn probe_image(record_path: &Path, record: &MapRecord) -> Option<(u32, u32)> {
    if record.tiles_per_row.is_some() || record.image.is_empty() {
        return None;
    }
    let image_path = resolve_image_path(record_path, &record.image);
    if !image_path.exists() {
        warn!("Tile source image not found: {:?}", image_path);
        return None;
    }
    match image_size(&image_path) {
        Ok(size) => Some(size),
        Err(e) => {
            warn!("Could not read tile source image {:?}: {}", image_path, e);
            None
        }
    }
}

/// Load a map file into a session
///
/// Nothing changes in the session if the record or its image are invalid.
pub fn open_map<O: MapObserver>(
    session: &mut MapSession<O>,
    path: &Path,
) -> Result<MapRecord, ProjectError> {
    let record = load_record(path)?;
    let image_size = probe_image(path, &record);

    if let Some((width, height)) = image_size {
        record.grid_config()?.check_image_size(width, height)?;
    }
    session.load(&record)?;
    if let Some((width, height)) = image_size {
        session.set_image_size(width, height)?;
    }

    info!("Opened map {:?}", path);
    Ok(record)
}

/// Save the session's current state to a map file
pub fn save_map<O: MapObserver>(session: &MapSession<O>, path: &Path) -> Result<(), ProjectError> {
    let record = session.to_record()?;
    save_record(&record, path)
}
