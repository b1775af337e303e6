//! Map record file save/load operations

use std::path::Path;
use thiserror::Error;
use tile_map_core::{MapError, MapRecord};
use tracing::info;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid map: {0}")]
    InvalidMap(#[from] MapError),
}

/// Load a map record from a JSON file
pub fn load_record(path: &Path) -> Result<MapRecord, ProjectError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(ProjectError::Parse)
}

/// Save a map record as pretty-printed JSON
pub fn save_record(record: &MapRecord, path: &Path) -> Result<(), ProjectError> {
    let content = serde_json::to_string_pretty(record).map_err(ProjectError::Serialize)?;
    std::fs::write(path, content)?;
    info!("Saved map record to {:?}", path);
    Ok(())
}

/// Read the pixel size of an image without decoding it
pub fn image_size(path: &Path) -> Result<(u32, u32), ProjectError> {
    Ok(image::image_dimensions(path)?)
}
