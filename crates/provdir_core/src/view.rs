//! List/table view engine.
//!
//! Holds everything the directory view needs besides the records
//! themselves: the free-text filter, the sort key and direction, the
//! multi-select set, the inline cell editor, and the table/list display
//! mode. The visible row set is derived from the backing sequence on every
//! call as a pure pipeline; nothing here is cached.
//!
//! Selection and edit targets are ORIGINAL indices (positions in the
//! unfiltered backing sequence), carried through the pipeline as
//! `(index, record)` pairs so that filtering and sorting can never skew
//! what a checkbox or an editor points at.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::record::{Field, ProviderRecord};
use crate::validate::is_valid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Table,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::List,
            ViewMode::List => ViewMode::Table,
        }
    }
}

/// One row of the visible set: a record paired with its original index.
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    pub index: usize,
    pub record: &'a ProviderRecord,
}

/// The open inline cell editor.
#[derive(Debug, Clone)]
pub struct CellEdit {
    pub index: usize,
    pub field: Field,
    pub draft: String,
    /// Set once a commit attempt has been rejected; gates the error display
    /// the same way the creation form's touched flag does.
    commit_rejected: bool,
}

/// Outcome of an inline-edit commit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommit {
    /// Draft is changed and valid; apply this single-field update.
    Apply {
        index: usize,
        field: Field,
        value: String,
    },
    /// Draft equals the stored value; editor closed, nothing to apply.
    Unchanged,
    /// Draft failed validation; the editor stays open showing the error.
    Rejected,
    /// No editor was open.
    Idle,
}

#[derive(Debug)]
pub struct ListView {
    filter: String,
    sort_key: Field,
    direction: SortDirection,
    selected: BTreeSet<usize>,
    editing: Option<CellEdit>,
    mode: ViewMode,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort_key: Field::LastName,
            direction: SortDirection::Asc,
            selected: BTreeSet::new(),
            editing: None,
            mode: ViewMode::List,
        }
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Filter ---

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    // --- Sort ---

    pub fn sort_key(&self) -> Field {
        self.sort_key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn set_sort_key(&mut self, field: Field) {
        self.sort_key = field;
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// Column-header click: flip direction on the current key, otherwise
    /// switch to the new key ascending.
    pub fn sort_by(&mut self, field: Field) {
        if self.sort_key == field {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Header suffix for a column: arrow on the active sort key, else empty.
    pub fn sort_indicator(&self, field: Field) -> &'static str {
        if self.sort_key != field {
            return "";
        }
        match self.direction {
            SortDirection::Asc => " \u{25b2}",
            SortDirection::Desc => " \u{25bc}",
        }
    }

    // --- Display mode ---

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    // --- Visible set ---

    /// Derive the visible rows: pair, filter, stable sort.
    ///
    /// The filter is a case-insensitive substring match against ANY field;
    /// an empty filter matches everything. The sort compares case-folded
    /// values of the sort key; direction flips comparison polarity only, so
    /// ties keep their original relative order either way.
    pub fn visible_rows<'a>(&self, records: &'a [ProviderRecord]) -> Vec<VisibleRow<'a>> {
        let needle = self.filter.to_lowercase();
        let mut rows: Vec<VisibleRow<'a>> = records
            .iter()
            .enumerate()
            .map(|(index, record)| VisibleRow { index, record })
            .filter(|row| {
                needle.is_empty()
                    || Field::ALL
                        .iter()
                        .any(|&field| row.record.get(field).to_lowercase().contains(&needle))
            })
            .collect();

        let key = self.sort_key;
        let direction = self.direction;
        rows.sort_by(|a, b| {
            let ordering = a
                .record
                .get(key)
                .to_lowercase()
                .cmp(&b.record.get(key).to_lowercase());
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        rows
    }

    /// Message to show instead of rows when the visible set is empty.
    pub fn empty_message(&self) -> &'static str {
        if self.filter.is_empty() {
            "No providers available."
        } else {
            "No providers match the current filter."
        }
    }

    // --- Selection ---

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn toggle_select(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Whether every currently-visible row is selected (false when the
    /// visible set is empty). Recomputed live, never cached.
    pub fn all_selected(&self, records: &[ProviderRecord]) -> bool {
        let rows = self.visible_rows(records);
        !rows.is_empty() && rows.iter().all(|row| self.selected.contains(&row.index))
    }

    /// Select every visible row, or clear the selection if all of them are
    /// already selected.
    pub fn toggle_select_all(&mut self, records: &[ProviderRecord]) {
        if self.all_selected(records) {
            self.selected.clear();
        } else {
            self.selected = self
                .visible_rows(records)
                .iter()
                .map(|row| row.index)
                .collect();
        }
    }

    /// Drain the selection for a removal, returning the original indices.
    pub fn take_selection(&mut self) -> Vec<usize> {
        let indices = self.selected.iter().copied().collect();
        self.selected.clear();
        indices
    }

    // --- Inline edit ---

    pub fn editing(&self) -> Option<&CellEdit> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, index: usize, field: Field) -> bool {
        matches!(&self.editing, Some(edit) if edit.index == index && edit.field == field)
    }

    /// Open the editor on a cell, seeding the draft with the stored value.
    ///
    /// If another cell was being edited, that edit is abandoned silently
    /// without committing.
    pub fn begin_edit(&mut self, index: usize, field: Field, current: impl Into<String>) {
        self.editing = Some(CellEdit {
            index,
            field,
            draft: current.into(),
            commit_rejected: false,
        });
    }

    /// Keystroke in the open editor: the draft changes, the record does not.
    pub fn edit_input(&mut self, text: impl Into<String>) {
        if let Some(edit) = &mut self.editing {
            edit.draft = text.into();
        }
    }

    /// The error message for the open editor, if a rejected commit left it
    /// open and the draft is still invalid.
    pub fn edit_error(&self) -> Option<&'static str> {
        let edit = self.editing.as_ref()?;
        if edit.commit_rejected && !is_valid(edit.field, &edit.draft) {
            Some(edit.field.error_message())
        } else {
            None
        }
    }

    /// Attempt to commit the open editor (blur or Enter).
    ///
    /// An unchanged draft closes the editor without emitting. A changed,
    /// valid draft closes the editor and yields the single-field update to
    /// apply. A changed, invalid draft keeps the editor open with its error
    /// visible, and the stored record is untouched.
    pub fn commit_edit(&mut self, records: &[ProviderRecord]) -> EditCommit {
        let Some(edit) = self.editing.take() else {
            return EditCommit::Idle;
        };

        let stored = match records.get(edit.index) {
            Some(record) => record.get(edit.field),
            // Target vanished (e.g. removed out from under the editor).
            None => return EditCommit::Unchanged,
        };

        if edit.draft.trim() == stored {
            return EditCommit::Unchanged;
        }
        if is_valid(edit.field, &edit.draft) {
            return EditCommit::Apply {
                index: edit.index,
                field: edit.field,
                value: edit.draft,
            };
        }

        self.editing = Some(CellEdit {
            commit_rejected: true,
            ..edit
        });
        EditCommit::Rejected
    }

    /// Escape: discard the draft and close, never validating or emitting.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(first: &str, last: &str, email: &str) -> ProviderRecord {
        ProviderRecord {
            first_name: first.into(),
            last_name: last.into(),
            email_address: email.into(),
            specialty: String::new(),
            practice_name: String::new(),
        }
    }

    fn sample() -> Vec<ProviderRecord> {
        vec![
            record("Alice", "Young", "alice@young.org"),
            record("Bob", "Adams", "bob@adams.org"),
            record("Carol", "Adams", "carol@adams.org"),
        ]
    }

    fn visible_indices(view: &ListView, records: &[ProviderRecord]) -> Vec<usize> {
        view.visible_rows(records).iter().map(|r| r.index).collect()
    }

    #[test]
    fn empty_filter_matches_everything_in_order() {
        let records = sample();
        let mut view = ListView::new();
        view.set_sort_key(Field::FirstName);
        assert_eq!(visible_indices(&view, &records), vec![0, 1, 2]);
    }

    #[test]
    fn filter_is_case_insensitive_across_any_field() {
        let records = sample();
        let mut view = ListView::new();
        view.set_filter("ADAMS");
        assert_eq!(visible_indices(&view, &records), vec![1, 2]);
        view.set_filter("alice@");
        assert_eq!(visible_indices(&view, &records), vec![0]);
        view.set_filter("nobody");
        assert!(visible_indices(&view, &records).is_empty());
    }

    #[test]
    fn sort_is_stable_and_direction_flips_polarity_only() {
        let records = sample();
        let view = ListView::new(); // default: last_name asc
        assert_eq!(visible_indices(&view, &records), vec![1, 2, 0]);

        let mut view = ListView::new();
        view.toggle_direction();
        // The two Adams rows keep their relative order under desc too.
        assert_eq!(visible_indices(&view, &records), vec![0, 1, 2]);
    }

    #[test]
    fn header_click_selects_then_flips() {
        let mut view = ListView::new();
        view.sort_by(Field::EmailAddress);
        assert_eq!(view.sort_key(), Field::EmailAddress);
        assert_eq!(view.direction(), SortDirection::Asc);
        view.sort_by(Field::EmailAddress);
        assert_eq!(view.direction(), SortDirection::Desc);
        assert_eq!(view.sort_indicator(Field::EmailAddress), " \u{25bc}");
        assert_eq!(view.sort_indicator(Field::LastName), "");
    }

    #[test]
    fn select_all_toggles_between_empty_and_full_visible() {
        let records = sample();
        let mut view = ListView::new();
        view.set_filter("adams");
        view.toggle_select_all(&records);
        assert_eq!(view.take_selection(), vec![1, 2]);

        view.set_filter("adams");
        view.toggle_select_all(&records);
        view.toggle_select_all(&records);
        assert!(view.selected().is_empty(), "double toggle returns to empty");
    }

    #[test]
    fn select_all_with_partial_selection_selects_everything_visible() {
        let records = sample();
        let mut view = ListView::new();
        view.toggle_select(1);
        assert!(!view.all_selected(&records));
        view.toggle_select_all(&records);
        assert_eq!(view.selected().len(), 3);
        assert!(view.all_selected(&records));
    }

    #[test]
    fn commit_applies_changed_valid_draft() {
        let records = sample();
        let mut view = ListView::new();
        view.begin_edit(1, Field::LastName, "Adams");
        view.edit_input("Atwood");
        let outcome = view.commit_edit(&records);
        assert_eq!(
            outcome,
            EditCommit::Apply {
                index: 1,
                field: Field::LastName,
                value: "Atwood".into(),
            }
        );
        assert!(view.editing().is_none());
    }

    #[test]
    fn commit_with_unchanged_draft_closes_without_emitting() {
        let records = sample();
        let mut view = ListView::new();
        view.begin_edit(0, Field::FirstName, "Alice");
        assert_eq!(view.commit_edit(&records), EditCommit::Unchanged);
        assert!(view.editing().is_none());
    }

    #[test]
    fn rejected_commit_keeps_editor_open_with_error() {
        let records = sample();
        let mut view = ListView::new();
        view.begin_edit(0, Field::EmailAddress, "alice@young.org");
        view.edit_input("not-an-email");
        assert!(view.edit_error().is_none(), "no error before a commit attempt");
        assert_eq!(view.commit_edit(&records), EditCommit::Rejected);
        let edit = view.editing().expect("editor stays open");
        assert_eq!(edit.draft, "not-an-email");
        assert_eq!(
            view.edit_error(),
            Some("Enter a valid email address (required)")
        );
        // Fixing the draft clears the error even before the next commit.
        view.edit_input("alice@young.net");
        assert!(view.edit_error().is_none());
    }

    #[test]
    fn cancel_discards_draft_without_validating() {
        let records = sample();
        let mut view = ListView::new();
        view.begin_edit(0, Field::EmailAddress, "alice@young.org");
        view.edit_input("garbage");
        view.cancel_edit();
        assert!(view.editing().is_none());
        assert_eq!(view.commit_edit(&records), EditCommit::Idle);
    }

    #[test]
    fn starting_a_new_edit_abandons_the_previous_one() {
        let mut view = ListView::new();
        view.begin_edit(0, Field::FirstName, "Alice");
        view.edit_input("Alicia");
        view.begin_edit(2, Field::LastName, "Adams");
        let edit = view.editing().unwrap();
        assert_eq!((edit.index, edit.field), (2, Field::LastName));
        assert_eq!(edit.draft, "Adams");
    }

    #[test]
    fn empty_message_reflects_filter_state() {
        let mut view = ListView::new();
        assert_eq!(view.empty_message(), "No providers available.");
        view.set_filter("zzz");
        assert_eq!(view.empty_message(), "No providers match the current filter.");
    }
}
