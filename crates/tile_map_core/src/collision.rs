//! Collision group vocabulary

use crate::{MapError, MapField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The collision groups a tile may be tagged with
///
/// The empty label means "no collision group" and is always accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionVocabulary {
    /// Any label is accepted
    #[default]
    Unrestricted,
    /// Only the listed labels are accepted
    Only(BTreeSet<String>),
}

impl CollisionVocabulary {
    /// Restrict labels to the given groups
    pub fn only<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CollisionVocabulary::Only(groups.into_iter().map(Into::into).collect())
    }

    /// Check if a label may be assigned to a tile
    pub fn accepts(&self, label: &str) -> bool {
        match self {
            CollisionVocabulary::Unrestricted => true,
            CollisionVocabulary::Only(groups) => label.is_empty() || groups.contains(label),
        }
    }

    /// Like [`accepts`](Self::accepts), reporting a rejected label as `InvalidValue`
    pub fn check(&self, label: &str) -> Result<(), MapError> {
        if self.accepts(label) {
            Ok(())
        } else {
            Err(MapError::invalid(
                MapField::CollisionGroup,
                format!("unknown collision group '{}'", label),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_accepts_anything() {
        let vocabulary = CollisionVocabulary::default();
        assert!(vocabulary.accepts("obstruction"));
        assert!(vocabulary.accepts(""));
        assert!(vocabulary.check("anything at all").is_ok());
    }

    #[test]
    fn test_restricted_vocabulary() {
        let vocabulary = CollisionVocabulary::only(["obstruction", "hazard"]);
        assert!(vocabulary.accepts("hazard"));
        assert!(vocabulary.accepts(""));
        assert!(!vocabulary.accepts("water"));

        let err = vocabulary.check("water").unwrap_err();
        assert_eq!(err.field(), Some(MapField::CollisionGroup));
    }
}
