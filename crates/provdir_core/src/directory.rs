//! Top-level provider directory.
//!
//! Exclusive owner of the record sequence. The creation form and the list
//! view never hold their own copy of the records; they communicate intent
//! (add / update one field / remove these indices) and this type applies it
//! to the store, then fires a save through the persistence bridge.
//!
//! Saves are fire-and-forget: a failed save is logged and the in-memory
//! state stands. Loads that return a corrupted blob fall back to the
//! bundled sample dataset rather than failing the whole directory.

use crate::form::ProviderForm;
use crate::record::ProviderRecord;
use crate::storage::{sample_providers, StorageBridge, PROVIDERS_KEY};
use crate::store::RecordStore;
use crate::view::{EditCommit, ListView};

pub struct ProviderDirectory {
    store: RecordStore,
    form: ProviderForm,
    view: ListView,
    bridge: Box<dyn StorageBridge + Send>,
}

impl ProviderDirectory {
    /// Open the directory over a persistence bridge.
    ///
    /// Seeds from the bundled sample dataset when the key is absent, when
    /// the load itself fails, or when the stored blob does not parse.
    pub fn open(bridge: Box<dyn StorageBridge + Send>) -> Self {
        let records = match bridge.load(PROVIDERS_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<ProviderRecord>>(&blob) {
                Ok(records) => {
                    tracing::debug!(count = records.len(), "loaded stored providers");
                    records
                }
                Err(err) => {
                    tracing::warn!(error = %err, "stored providers blob is corrupt, using sample data");
                    sample_providers()
                }
            },
            Ok(None) => {
                tracing::debug!("no stored providers, seeding sample data");
                sample_providers()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stored providers, using sample data");
                sample_providers()
            }
        };

        Self {
            store: RecordStore::new(records),
            form: ProviderForm::new(),
            view: ListView::new(),
            bridge,
        }
    }

    pub fn records(&self) -> &[ProviderRecord] {
        self.store.records()
    }

    pub fn form(&self) -> &ProviderForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProviderForm {
        &mut self.form
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// View-state operations that never touch the store (filter, sort,
    /// selection, display mode, opening/typing/cancelling an edit).
    pub fn view_mut(&mut self) -> &mut ListView {
        &mut self.view
    }

    /// Select every visible row, or clear the selection when the visible
    /// set is already fully selected.
    pub fn toggle_select_all(&mut self) {
        self.view.toggle_select_all(self.store.records());
    }

    /// Attempt to submit the creation form.
    ///
    /// On success the new record is appended and persisted; returns whether
    /// a record was added.
    pub fn submit_form(&mut self) -> bool {
        match self.form.submit() {
            Some(record) => {
                tracing::info!(last_name = %record.last_name, "provider created");
                self.store.push(record);
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Attempt to commit the open inline editor (blur or Enter).
    ///
    /// Applies and persists the single-field update when the draft is
    /// changed and valid; see [`EditCommit`] for the other outcomes.
    pub fn commit_edit(&mut self) -> EditCommit {
        let outcome = self.view.commit_edit(self.store.records());
        if let EditCommit::Apply { index, field, ref value } = outcome {
            if self.store.set_field(index, field, value.clone()) {
                tracing::info!(index, field = %field, "provider field updated");
                self.persist();
            }
        }
        outcome
    }

    /// Remove every selected record, clearing the selection.
    ///
    /// Selection indices are original indices into the backing sequence,
    /// independent of whatever filter or sort is active. Any open editor is
    /// closed, since its target index may no longer mean the same record.
    pub fn remove_selected(&mut self) -> usize {
        let indices = self.view.take_selection();
        if indices.is_empty() {
            return 0;
        }
        self.view.cancel_edit();
        let removed = self.store.remove_indices(&indices);
        tracing::info!(removed, "providers removed");
        self.persist();
        removed
    }

    fn persist(&self) {
        let blob = match serde_json::to_string(self.store.records()) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize providers");
                return;
            }
        };
        if let Err(err) = self.bridge.save(PROVIDERS_KEY, &blob) {
            tracing::warn!(error = %err, "failed to save providers");
        }
    }
}
