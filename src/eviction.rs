//! Eviction coordinator
//!
//! Translates user delete intents into store calls and reconciles the
//! catalog afterward. The filesystem offers no multi-file transaction, so
//! bulk deletes are best-effort batches: every selected id is attempted
//! exactly once, failures never abort the rest, and the result reports
//! precisely which ids succeeded and which remain.

use crate::catalog::Catalog;
use crate::error::{Result, StoreError};
use crate::store::ContentStore;

/// Outcome of a multi-id deletion.
///
/// A value, not an error: callers distinguish "all succeeded", "partial",
/// and "all failed" without exceptions. Failed ids stay in the catalog and
/// stay selected so the user can retry.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Ids whose store delete succeeded, in attempt order
    pub succeeded: Vec<String>,
    /// Ids whose store delete failed, with the failure, in attempt order
    pub failed: Vec<(String, StoreError)>,
}

impl BatchResult {
    /// True iff no deletion failed (including the empty batch)
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    /// True iff nothing was attempted
    pub fn is_empty(&self) -> bool {
        self.succeeded.is_empty() && self.failed.is_empty()
    }

    /// Failed ids without their errors
    pub fn failed_ids(&self) -> Vec<&str> {
        self.failed.iter().map(|(id, _)| id.as_str()).collect()
    }

    /// Counts for user-facing messaging, e.g. "2 removed, 1 failed"
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "nothing selected".to_string();
        }
        if self.failed.is_empty() {
            return format!("{} removed", self.succeeded.len());
        }
        format!(
            "{} removed, {} failed",
            self.succeeded.len(),
            self.failed.len()
        )
    }
}

/// Executes single, multi-select, and full-wipe deletions.
///
/// Borrows the store and the catalog for the duration of one user intent;
/// the catalog is only ever mutated here after the store confirmed the
/// corresponding delete.
pub struct EvictionCoordinator<'a> {
    store: &'a ContentStore,
    catalog: &'a mut Catalog,
}

impl<'a> EvictionCoordinator<'a> {
    pub fn new(store: &'a ContentStore, catalog: &'a mut Catalog) -> Self {
        Self { store, catalog }
    }

    /// Delete a single exhibition.
    ///
    /// On success the id leaves the catalog's loaded set and selection
    /// without a full refresh. On failure the catalog is left unchanged and
    /// the error propagates for user-facing messaging; no automatic retry.
    pub fn delete_one(&mut self, id: &str) -> Result<()> {
        self.store.delete(id)?;
        self.catalog.remove(id);
        Ok(())
    }

    /// Delete every selected exhibition, best-effort.
    ///
    /// An empty selection is a no-op reported as an empty result. Ids are
    /// attempted in the selection's sorted order; a failure on one id never
    /// short-circuits the rest. Succeeded ids leave the catalog, failed ids
    /// remain loaded and selected for retry.
    pub fn delete_selected(&mut self) -> BatchResult {
        let ids = self.catalog.selected_ids();
        self.delete_batch(&ids)
    }

    /// Delete every loaded exhibition, best-effort.
    ///
    /// Equivalent to selecting everything and running the batch: afterward
    /// the catalog retains only the ids that failed, still selected.
    pub fn delete_all(&mut self) -> BatchResult {
        let ids = self.catalog.loaded_ids();
        let result = self.delete_batch(&ids);
        for (id, _) in &result.failed {
            if !self.catalog.is_selected(id) {
                self.catalog.toggle_select(id);
            }
        }
        result
    }

    fn delete_batch(&mut self, ids: &[String]) -> BatchResult {
        let mut result = BatchResult::default();
        for id in ids {
            match self.store.delete(id) {
                Ok(()) => {
                    self.catalog.remove(id);
                    result.succeeded.push(id.clone());
                }
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "failed to delete exhibition");
                    result.failed.push((id.clone(), e));
                }
            }
        }
        result
    }
}
