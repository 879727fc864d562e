//! Path selection state for the map widget.
//!
//! Maintains the ordered sequence of selected point ids (insertion order is
//! path order) and provides toggle/reset mutations plus non-mutating queries.
//!
//! # Usage
//!
//! ```rust,ignore
//! use waypath::selection::PathSelection;
//!
//! let mut sel = PathSelection::new();
//! sel.toggle(&dataset, 1);
//! sel.toggle(&dataset, 3);
//! assert_eq!(sel.index_of(3), Some(2));
//! ```

use crate::model::Dataset;

/// Ordered, toggle-based selection over a fixed point set.
///
/// Invariants: every id is present in the current dataset, no id appears
/// twice. Starts empty; mutated only by [`toggle`](Self::toggle) and
/// [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct PathSelection {
    /// Selected point ids in path order.
    ids: Vec<u32>,
}

impl PathSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a point in or out of the path.
    ///
    /// A selected id is removed from wherever it sits; later points keep
    /// their relative order but their 1-based indices shift down by one. An
    /// unselected id is appended at the end and becomes the new last path
    /// node. Ids not present in `dataset` are ignored.
    pub fn toggle(&mut self, dataset: &Dataset, id: u32) {
        if let Some(pos) = self.ids.iter().position(|&i| i == id) {
            self.ids.remove(pos);
        } else if dataset.contains(id) {
            self.ids.push(id);
        }
    }

    /// Clear the selection, regardless of prior state.
    pub fn reset(&mut self) {
        self.ids.clear();
    }

    /// Check whether a point id is currently part of the path.
    pub fn is_selected(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// 1-based position of a point in the path, or `None` if not selected.
    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.ids.iter().position(|&i| i == id).map(|i| i + 1)
    }

    /// Selected ids in path order.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
