//! In-memory record store.
//!
//! The ordered backing sequence of provider records. Every index handed to
//! this store is an ORIGINAL index: a position in this unfiltered sequence,
//! never a position in some filtered or sorted view of it.

use crate::record::{Field, ProviderRecord};

/// The ordered sequence of provider records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<ProviderRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<ProviderRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ProviderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record to the end of the sequence.
    pub fn push(&mut self, record: ProviderRecord) {
        self.records.push(record);
    }

    /// Overwrite a single field of the record at `index`.
    ///
    /// Returns false when the index is out of range.
    pub fn set_field(&mut self, index: usize, field: Field, value: String) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Remove the records at the given original indices.
    ///
    /// Order does not matter and out-of-range indices are ignored. Returns
    /// the number of records actually removed.
    pub fn remove_indices(&mut self, indices: &[usize]) -> usize {
        let doomed: std::collections::BTreeSet<usize> = indices.iter().copied().collect();
        let before = self.records.len();
        let mut position = 0;
        self.records.retain(|_| {
            let keep = !doomed.contains(&position);
            position += 1;
            keep
        });
        before - self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(last: &str) -> ProviderRecord {
        ProviderRecord {
            last_name: last.into(),
            ..Default::default()
        }
    }

    fn last_names(store: &RecordStore) -> Vec<&str> {
        store.records().iter().map(|r| r.last_name.as_str()).collect()
    }

    #[test]
    fn remove_targets_original_indices() {
        let mut store = RecordStore::new(vec![named("A"), named("B"), named("C")]);
        assert_eq!(store.len(), 3);
        let removed = store.remove_indices(&[2]);
        assert_eq!(removed, 1);
        assert_eq!(last_names(&store), vec!["A", "B"]);
        assert!(!store.is_empty());
    }

    #[test]
    fn remove_accepts_any_order_and_ignores_out_of_range() {
        let mut store = RecordStore::new(vec![named("A"), named("B"), named("C"), named("D")]);
        let removed = store.remove_indices(&[3, 0, 99]);
        assert_eq!(removed, 2);
        assert_eq!(last_names(&store), vec!["B", "C"]);
    }

    #[test]
    fn set_field_rejects_out_of_range() {
        let mut store = RecordStore::new(vec![named("A")]);
        assert!(store.set_field(0, Field::Specialty, "Oncology".into()));
        assert!(!store.set_field(1, Field::Specialty, "Oncology".into()));
        assert_eq!(store.records()[0].specialty, "Oncology");
    }
}
