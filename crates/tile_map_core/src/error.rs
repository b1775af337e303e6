//! Error type shared by the tile source model

use crate::MapField;
use thiserror::Error;

/// Errors raised by map record validation and session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A value outside the declared domain of a field
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: MapField, reason: String },

    /// The operation needs a loaded map record
    #[error("no map record is loaded")]
    NotLoaded,
}

impl MapError {
    /// Shorthand for [`MapError::InvalidValue`]
    pub fn invalid(field: MapField, reason: impl Into<String>) -> Self {
        MapError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// The field that rejected the value, if any
    pub fn field(&self) -> Option<MapField> {
        match self {
            MapError::InvalidValue { field, .. } => Some(*field),
            MapError::NotLoaded => None,
        }
    }
}
