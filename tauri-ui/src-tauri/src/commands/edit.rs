//! Inline cell-edit commands.
//!
//! The webview maps double-click to [`edit_begin`], keystrokes to
//! [`edit_input`], blur and Enter both to [`edit_commit`], and Escape to
//! [`edit_cancel`]. Whether the editor is open, what its draft holds, and
//! any validation error all come back inside the snapshot's cell payloads.

use provdir_core::EditCommit;
use tauri::State;

use crate::commands::form::parse_field;
use crate::commands::DirectorySnapshot;
use crate::state::{AppState, CommandError, CommandResult};

/// Double-click on a displayed cell: open the editor seeded with the
/// stored value. An already-open editor on another cell is abandoned
/// silently, without committing.
#[tauri::command]
pub fn edit_begin(
    index: usize,
    field: String,
    state: State<'_, AppState>,
) -> CommandResult<DirectorySnapshot> {
    let field = parse_field(&field)?;
    let mut dir = state.directory();
    let current = dir
        .records()
        .get(index)
        .map(|record| record.get(field).to_string())
        .ok_or_else(|| CommandError::InvalidArgument(format!("no provider at index {index}")))?;
    dir.view_mut().begin_edit(index, field, current);
    Ok(DirectorySnapshot::capture(&dir))
}

/// Keystroke in the open editor: updates the draft only.
#[tauri::command]
pub fn edit_input(value: String, state: State<'_, AppState>) -> CommandResult<DirectorySnapshot> {
    let mut dir = state.directory();
    dir.view_mut().edit_input(value);
    Ok(DirectorySnapshot::capture(&dir))
}

/// Blur or Enter: attempt to commit the draft. A changed valid draft is
/// applied and persisted; an invalid one keeps the editor open with its
/// error showing; an unchanged one just closes.
#[tauri::command]
pub fn edit_commit(state: State<'_, AppState>) -> CommandResult<DirectorySnapshot> {
    let mut dir = state.directory();
    let outcome = dir.commit_edit();
    if let EditCommit::Apply { index, field, .. } = &outcome {
        tracing::debug!(index, field = %field, "inline edit applied");
    }
    Ok(DirectorySnapshot::capture(&dir))
}

/// Escape: discard the draft and close the editor.
#[tauri::command]
pub fn edit_cancel(state: State<'_, AppState>) -> CommandResult<DirectorySnapshot> {
    let mut dir = state.directory();
    dir.view_mut().cancel_edit();
    Ok(DirectorySnapshot::capture(&dir))
}
