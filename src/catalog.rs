//! In-memory catalog of downloaded exhibitions
//!
//! The UI-facing projection of the store's enumeration result, plus the
//! selection set for bulk deletes. The catalog is never the source of
//! truth: it is rebuilt from the store on every screen entry via
//! [`Catalog::refresh`], and there is no incremental path for items to
//! enter it. The one incremental mutation allowed is removal, driven by
//! the eviction coordinator after a delete it performed itself.

use std::collections::BTreeSet;

use crate::domain::DownloadedExhibition;
use crate::error::Result;
use crate::store::ContentStore;

/// Loaded exhibitions plus the current bulk-delete selection.
///
/// The selection is always a subset of the loaded ids. Ids iterate in
/// sorted order, which fixes the per-call batch order for bulk deletes.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<DownloadedExhibition>,
    selection: BTreeSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the loaded set from the store and clear the selection.
    ///
    /// The only way items enter the catalog.
    pub fn refresh(&mut self, store: &ContentStore) -> Result<()> {
        self.items = store.list_all()?;
        self.selection.clear();
        Ok(())
    }

    /// Currently loaded exhibitions, in enumeration order
    pub fn items(&self) -> &[DownloadedExhibition] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True iff an exhibition with this id is loaded
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Ids of all loaded exhibitions, in sorted order
    pub fn loaded_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.items.iter().map(|item| item.id.clone()).collect();
        ids.sort();
        ids
    }

    /// Flip membership of `id` in the selection.
    ///
    /// No-op for ids that are not loaded, so the selection stays a subset
    /// of the loaded set.
    pub fn toggle_select(&mut self, id: &str) {
        if !self.contains(id) {
            return;
        }
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    /// Select every loaded exhibition
    pub fn select_all(&mut self) {
        self.selection = self.items.iter().map(|item| item.id.clone()).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// True iff the id is currently selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// True iff every loaded exhibition is selected and at least one is loaded
    pub fn is_all_selected(&self) -> bool {
        !self.items.is_empty() && self.selection.len() == self.items.len()
    }

    /// Selected ids in sorted order (the batch order for bulk deletes)
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.iter().cloned().collect()
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Remove one exhibition from the loaded set and the selection.
    ///
    /// Reserved for the eviction coordinator, which calls it only after the
    /// store confirmed the corresponding delete.
    pub(crate) fn remove(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
        self.selection.remove(id);
    }
}
