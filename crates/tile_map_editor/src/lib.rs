//! tile_map_editor - Editing sessions for tile sources
//!
//! This crate provides the model side of a tile source editor:
//! - `MapSession` - Load a record, edit its fields, select tiles and tag them
//!   with collision groups
//! - `MapObserver` - The view interface every change is forwarded to
//! - Map record files and image probing (`project`)
//! - User preferences such as the collision group vocabulary (`preferences`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use tile_map_editor::preferences::EditorPreferences;
//! use tile_map_editor::project::open_map;
//!
//! let prefs = EditorPreferences::load();
//! let mut session = prefs.new_session(my_view);
//! open_map(&mut session, path)?;
//! session.select_tile(column, row)?;
//! session.set_selected_tiles_collision_group("obstruction")?;
//! ```

pub mod preferences;
pub mod project;

mod observer;
mod selection;
mod session;

// Re-export the core data types
pub use tile_map_core;

pub use observer::MapObserver;
pub use selection::SelectionSet;
pub use session::MapSession;
