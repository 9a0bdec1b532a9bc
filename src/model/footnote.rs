//! Footnote table and linking report.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anchor id of the footnote with the given index.
pub fn footnote_anchor(index: u32) -> String {
    format!("footnote-{index}")
}

/// Removable mapping from footnote index to footnote body.
///
/// Footnotes can only be taken in ascending order: [`FootnoteTable::take`]
/// succeeds only for the smallest remaining index.
#[derive(Debug, Clone, Default)]
pub struct FootnoteTable {
    entries: BTreeMap<u32, String>,
}

impl FootnoteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a footnote. Returns `false` if the index was already present,
    /// in which case the existing body is kept.
    pub fn insert(&mut self, index: u32, body: impl Into<String>) -> bool {
        if self.entries.contains_key(&index) {
            return false;
        }
        self.entries.insert(index, body.into());
        true
    }

    /// Number of remaining footnotes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no footnotes remain.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest remaining index.
    pub fn min_index(&self) -> Option<u32> {
        self.entries.keys().next().copied()
    }

    /// Consume the footnote with the given index if it is the current minimum.
    pub fn take(&mut self, index: u32) -> Option<String> {
        if self.min_index() != Some(index) {
            return None;
        }
        self.entries.remove(&index)
    }

    /// Discard every footnote with an index below `index`, returning the
    /// discarded indices in ascending order.
    pub fn discard_below(&mut self, index: u32) -> Vec<u32> {
        let kept = self.entries.split_off(&index);
        let discarded = std::mem::replace(&mut self.entries, kept);
        discarded.into_keys().collect()
    }

    /// Remaining indices in ascending order.
    pub fn indices(&self) -> Vec<u32> {
        self.entries.keys().copied().collect()
    }
}

/// Outcome of the footnote linking passes for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootnoteReport {
    /// Footnotes found in the trailing list
    pub found: usize,

    /// Footnotes linked from a body reference
    pub linked: usize,

    /// Footnotes discarded by the skip tolerance
    pub skipped: usize,

    /// Footnotes never referenced
    pub unreferenced: usize,
}
