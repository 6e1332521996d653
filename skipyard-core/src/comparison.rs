//! Comparison tray and the pending picks of the "add to comparison" dialog.

use crate::model::{EnrichedSkip, SkipId};

#[derive(Debug, Clone, Default)]
/// Skips placed side by side for comparison, in the order they were added.
///
/// A skip id appears at most once.
pub struct ComparisonSet {
    skips: Vec<EnrichedSkip>,
}

impl ComparisonSet {
    /// Create an empty tray.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skip unless one with the same id is already present.
    ///
    /// Returns `true` when the skip was added.
    pub fn add(&mut self, skip: EnrichedSkip) -> bool {
        if self.contains(skip.id()) {
            return false;
        }
        self.skips.push(skip);
        true
    }

    /// Add every skip not already present, keeping the given order.
    ///
    /// Returns the number of skips added.
    pub fn add_many<I>(&mut self, skips: I) -> usize
    where
        I: IntoIterator<Item = EnrichedSkip>,
    {
        skips
            .into_iter()
            .map(|skip| self.add(skip))
            .filter(|added| *added)
            .count()
    }

    /// Remove the skip with the given id. Returns `true` when one was removed.
    pub fn remove(&mut self, id: SkipId) -> bool {
        let before = self.skips.len();
        self.skips.retain(|skip| skip.id() != id);
        self.skips.len() != before
    }

    /// Whether a skip with the given id is in the tray.
    #[must_use]
    pub fn contains(&self, id: SkipId) -> bool {
        self.skips.iter().any(|skip| skip.id() == id)
    }

    /// Empty the tray.
    pub fn clear(&mut self) {
        self.skips.clear();
    }

    /// Number of skips in the tray.
    #[must_use]
    pub fn len(&self) -> usize {
        self.skips.len()
    }

    /// Whether the tray is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skips.is_empty()
    }

    /// Skips in the tray, oldest first.
    #[must_use]
    pub fn skips(&self) -> &[EnrichedSkip] {
        &self.skips
    }
}

#[derive(Debug, Clone, Default)]
/// Skip ids ticked in the "add to comparison" dialog but not yet committed.
pub struct Selection {
    ids: Vec<SkipId>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick or untick an id.
    pub fn toggle(&mut self, id: SkipId) {
        if let Some(pos) = self.ids.iter().position(|picked| *picked == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Whether the id is ticked.
    #[must_use]
    pub fn contains(&self, id: SkipId) -> bool {
        self.ids.contains(&id)
    }

    /// Whether nothing is ticked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Move the ticked skips into `tray` in catalogue order and reset the selection.
    ///
    /// Returns the number of skips added.
    pub fn commit(&mut self, catalogue: &[EnrichedSkip], tray: &mut ComparisonSet) -> usize {
        let picked = catalogue
            .iter()
            .filter(|skip| self.contains(skip.id()))
            .cloned();
        let added = tray.add_many(picked);
        self.ids.clear();
        added
    }
}
