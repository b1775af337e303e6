//! The set of tiles chosen for batch editing

use std::collections::BTreeSet;

/// Selected tiles, keyed by linear tile index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: BTreeSet<u32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn contains(&self, index: u32) -> bool {
        self.indices.contains(&index)
    }

    /// Selected tile indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    /// Replace the selection with a single tile
    pub(crate) fn select_only(&mut self, index: u32) {
        self.indices.clear();
        self.indices.insert(index);
    }

    pub(crate) fn clear(&mut self) {
        self.indices.clear();
    }

    /// Drop tiles at or past `tile_count`; returns true if anything was dropped
    pub(crate) fn retain_below(&mut self, tile_count: u32) -> bool {
        let before = self.indices.len();
        self.indices.retain(|&index| index < tile_count);
        self.indices.len() != before
    }
}
