// SPDX-License-Identifier: MPL-2.0
//! Set of selected frame indices.

use std::collections::BTreeSet;

/// Frame indices picked for bulk export.
///
/// Ordering carries no meaning for the user, but iteration is ascending so
/// exports are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    indices: BTreeSet<usize>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `index` if absent, removes it otherwise.
    /// Indices outside `0..len` are ignored.
    pub fn toggle(&mut self, index: usize, len: usize) {
        if index >= len {
            return;
        }
        if !self.indices.remove(&index) {
            self.indices.insert(index);
        }
    }

    pub fn select_all(&mut self, len: usize) {
        self.indices = (0..len).collect();
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Drops every index that is no longer a valid frame index.
    pub fn retain_valid(&mut self, len: usize) {
        self.indices.retain(|&index| index < len);
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}
