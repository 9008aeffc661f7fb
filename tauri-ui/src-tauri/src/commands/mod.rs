//! Tauri command handlers for the provider directory.

pub mod edit;
pub mod form;
pub mod view;

use provdir_core::{card_view, form_view, table_view, CardListView, FormView, ProviderDirectory, TableView, ViewMode};
use serde::Serialize;
use tauri::State;

use crate::state::{AppState, CommandResult};

/// Everything the webview renders: the creation form plus the current
/// display mode's projection. Exactly one of `table`/`cards` is present.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorySnapshot {
    pub form: FormView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<CardListView>,
}

impl DirectorySnapshot {
    pub fn capture(dir: &ProviderDirectory) -> Self {
        let (table, cards) = match dir.view().mode() {
            ViewMode::Table => (Some(table_view(dir.view(), dir.records())), None),
            ViewMode::List => (None, Some(card_view(dir.view(), dir.records()))),
        };
        Self {
            form: form_view(dir.form()),
            table,
            cards,
        }
    }
}

/// Fetch the current snapshot without changing anything.
#[tauri::command]
pub fn directory_snapshot(state: State<'_, AppState>) -> CommandResult<DirectorySnapshot> {
    Ok(DirectorySnapshot::capture(&state.directory()))
}
