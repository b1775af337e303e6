//! Core data structures for tile sources
//!
//! This crate provides the plain data types shared by the editor and by
//! anything that persists or renders a tile source:
//! - `MapRecord` - The serialized tile source record
//! - `GridConfig` - Validated slicing parameters and grid arithmetic
//! - `Tile` - A single tile with its collision group label
//! - `CollisionVocabulary` - The set of collision groups a tile may carry
//! - `MapField` / `MapError` - Field identifiers and the shared error type

mod collision;
mod error;
mod field;
mod grid;
mod record;
mod tile;

pub use collision::CollisionVocabulary;
pub use error::MapError;
pub use field::{checked_dimension, MapField};
pub use grid::GridConfig;
pub use record::{MapRecord, DEFAULT_MATERIAL_TAG};
pub use tile::{default_tiles, Tile};
