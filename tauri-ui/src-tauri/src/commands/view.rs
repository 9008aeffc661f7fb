//! Filter, sort, display-mode, selection, and removal commands.

use tauri::State;

use crate::commands::form::parse_field;
use crate::commands::DirectorySnapshot;
use crate::state::{AppState, CommandResult};

/// Keystroke in the filter box.
#[tauri::command]
pub fn filter_set(value: String, state: State<'_, AppState>) -> CommandResult<DirectorySnapshot> {
    let mut dir = state.directory();
    dir.view_mut().set_filter(value);
    Ok(DirectorySnapshot::capture(&dir))
}

/// Sort-field selector change: pick a key, keep the current direction.
#[tauri::command]
pub fn sort_select(field: String, state: State<'_, AppState>) -> CommandResult<DirectorySnapshot> {
    let field = parse_field(&field)?;
    let mut dir = state.directory();
    dir.view_mut().set_sort_key(field);
    Ok(DirectorySnapshot::capture(&dir))
}

/// Sort-direction toggle button.
#[tauri::command]
pub fn sort_toggle_direction(state: State<'_, AppState>) -> CommandResult<DirectorySnapshot> {
    let mut dir = state.directory();
    dir.view_mut().toggle_direction();
    Ok(DirectorySnapshot::capture(&dir))
}

/// Column-header click: flip direction on the active key, else select the
/// clicked key ascending.
#[tauri::command]
pub fn sort_header_click(
    field: String,
    state: State<'_, AppState>,
) -> CommandResult<DirectorySnapshot> {
    let field = parse_field(&field)?;
    let mut dir = state.directory();
    dir.view_mut().sort_by(field);
    Ok(DirectorySnapshot::capture(&dir))
}

/// Table/list display-mode toggle.
#[tauri::command]
pub fn view_toggle_mode(state: State<'_, AppState>) -> CommandResult<DirectorySnapshot> {
    let mut dir = state.directory();
    dir.view_mut().toggle_mode();
    Ok(DirectorySnapshot::capture(&dir))
}

/// Row checkbox: toggle one original index in the selection.
#[tauri::command]
pub fn row_toggle_select(
    index: usize,
    state: State<'_, AppState>,
) -> CommandResult<DirectorySnapshot> {
    let mut dir = state.directory();
    dir.view_mut().toggle_select(index);
    Ok(DirectorySnapshot::capture(&dir))
}

/// Select-all checkbox: select every visible row, or clear when the visible
/// set is already fully selected.
#[tauri::command]
pub fn selection_toggle_all(state: State<'_, AppState>) -> CommandResult<DirectorySnapshot> {
    let mut dir = state.directory();
    dir.toggle_select_all();
    Ok(DirectorySnapshot::capture(&dir))
}

/// Remove button: delete every selected record (by original index) and
/// clear the selection.
#[tauri::command]
pub fn selection_remove(state: State<'_, AppState>) -> CommandResult<DirectorySnapshot> {
    let mut dir = state.directory();
    let removed = dir.remove_selected();
    tracing::debug!(removed, "selection removal handled");
    Ok(DirectorySnapshot::capture(&dir))
}
