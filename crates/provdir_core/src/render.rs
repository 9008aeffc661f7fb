//! View-mode presentation.
//!
//! Two pure functions project the same (view state, records) pair into
//! serializable display structures: a dense table and a card-per-provider
//! list. Both are built from the same visible-row pipeline and the same
//! per-cell payloads, so filter/sort/select/edit behavior cannot diverge
//! between modes.

use serde::Serialize;

use crate::form::ProviderForm;
use crate::record::{Field, ProviderRecord};
use crate::view::{ListView, SortDirection, ViewMode, VisibleRow};

/// One creation-form input: current text plus its visible error, if any.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldView {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// The creation form as displayed: fields in form order and the submit
/// control's enabled state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub fields: Vec<FormFieldView>,
    pub can_submit: bool,
}

/// Project the creation form for display.
pub fn form_view(form: &ProviderForm) -> FormView {
    FormView {
        fields: Field::ALL
            .iter()
            .map(|&field| FormFieldView {
                field,
                label: field.label(),
                value: form.value(field).to_string(),
                error: form.error(field),
            })
            .collect(),
        can_submit: form.can_submit(),
    }
}

/// One displayed cell: either plain text, or the open editor with its draft
/// and (possibly) its validation error.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub field: Field,
    pub text: String,
    pub editing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// One table column header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub field: Field,
    pub label: &'static str,
    pub indicator: &'static str,
}

/// One visible row: selection flag plus a cell per field in display order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub index: usize,
    pub selected: bool,
    pub cells: Vec<CellView>,
}

/// A visible row presented as a card. `name_line` is the "Last, First"
/// headline; the cells carry the same edit payloads as in table mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRow {
    pub index: usize,
    pub selected: bool,
    pub name_line: String,
    pub cells: Vec<CellView>,
}

/// Control state shared by both display modes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewChrome {
    pub mode: ViewMode,
    pub filter: String,
    pub sort_key: Field,
    pub sort_direction: SortDirection,
    pub selected_count: usize,
    pub all_selected: bool,
    pub remove_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub chrome: ViewChrome,
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardListView {
    pub chrome: ViewChrome,
    pub cards: Vec<CardRow>,
}

fn cell(view: &ListView, row: &VisibleRow<'_>, field: Field) -> CellView {
    let editing = view.is_editing(row.index, field);
    CellView {
        field,
        text: row.record.get(field).to_string(),
        editing,
        draft: if editing {
            view.editing().map(|edit| edit.draft.clone())
        } else {
            None
        },
        error: if editing { view.edit_error() } else { None },
    }
}

fn cells(view: &ListView, row: &VisibleRow<'_>) -> Vec<CellView> {
    Field::ALL.iter().map(|&field| cell(view, row, field)).collect()
}

fn chrome(view: &ListView, records: &[ProviderRecord], visible_len: usize) -> ViewChrome {
    let selected_count = view.selected().len();
    ViewChrome {
        mode: view.mode(),
        filter: view.filter().to_string(),
        sort_key: view.sort_key(),
        sort_direction: view.direction(),
        selected_count,
        all_selected: view.all_selected(records),
        remove_enabled: selected_count > 0,
        empty_message: (visible_len == 0).then(|| view.empty_message()),
    }
}

/// Project the current state as the dense table layout.
pub fn table_view(view: &ListView, records: &[ProviderRecord]) -> TableView {
    let rows = view.visible_rows(records);
    TableView {
        chrome: chrome(view, records, rows.len()),
        headers: Field::ALL
            .iter()
            .map(|&field| HeaderView {
                field,
                label: field.label(),
                indicator: view.sort_indicator(field),
            })
            .collect(),
        rows: rows
            .iter()
            .map(|row| RowView {
                index: row.index,
                selected: view.is_selected(row.index),
                cells: cells(view, row),
            })
            .collect(),
    }
}

/// Project the current state as the card-per-provider layout.
pub fn card_view(view: &ListView, records: &[ProviderRecord]) -> CardListView {
    let rows = view.visible_rows(records);
    CardListView {
        chrome: chrome(view, records, rows.len()),
        cards: rows
            .iter()
            .map(|row| CardRow {
                index: row.index,
                selected: view.is_selected(row.index),
                name_line: format!("{}, {}", row.record.last_name, row.record.first_name),
                cells: cells(view, row),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ProviderRecord> {
        vec![
            ProviderRecord {
                first_name: "Alice".into(),
                last_name: "Young".into(),
                email_address: "alice@young.org".into(),
                specialty: "Cardiology".into(),
                practice_name: "Young Heart".into(),
            },
            ProviderRecord {
                first_name: "Bob".into(),
                last_name: "Adams".into(),
                email_address: "bob@adams.org".into(),
                specialty: String::new(),
                practice_name: String::new(),
            },
        ]
    }

    #[test]
    fn table_and_cards_share_the_same_visible_order() {
        let records = records();
        let view = ListView::new(); // last_name asc: Adams before Young
        let table = table_view(&view, &records);
        let cards = card_view(&view, &records);
        let table_order: Vec<usize> = table.rows.iter().map(|r| r.index).collect();
        let card_order: Vec<usize> = cards.cards.iter().map(|c| c.index).collect();
        assert_eq!(table_order, vec![1, 0]);
        assert_eq!(card_order, table_order);
    }

    #[test]
    fn card_name_line_is_last_comma_first() {
        let records = records();
        let view = ListView::new();
        let cards = card_view(&view, &records);
        assert_eq!(cards.cards[0].name_line, "Adams, Bob");
    }

    #[test]
    fn open_editor_shows_up_in_exactly_one_cell() {
        let records = records();
        let mut view = ListView::new();
        view.begin_edit(0, Field::Specialty, "Cardiology");
        view.edit_input("Oncology");
        let table = table_view(&view, &records);
        let editing: Vec<&CellView> = table
            .rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| c.editing)
            .collect();
        assert_eq!(editing.len(), 1);
        assert_eq!(editing[0].field, Field::Specialty);
        assert_eq!(editing[0].draft.as_deref(), Some("Oncology"));
        assert_eq!(editing[0].text, "Cardiology", "stored value untouched");
    }

    #[test]
    fn form_view_shows_errors_only_for_touched_fields() {
        let mut form = ProviderForm::new();
        form.input(Field::EmailAddress, "oops");
        let view = form_view(&form);
        assert!(!view.can_submit);
        for field_view in &view.fields {
            if field_view.field == Field::EmailAddress {
                assert_eq!(field_view.error, Some("Enter a valid email address (required)"));
            } else {
                assert!(field_view.error.is_none());
            }
        }
    }

    #[test]
    fn empty_visible_set_carries_a_message() {
        let records = records();
        let mut view = ListView::new();
        view.set_filter("no such provider");
        let table = table_view(&view, &records);
        assert!(table.rows.is_empty());
        assert_eq!(
            table.chrome.empty_message,
            Some("No providers match the current filter.")
        );
        assert!(!table.chrome.remove_enabled);
    }
}
