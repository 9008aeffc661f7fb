//! Creation-form commands.

use provdir_core::Field;
use tauri::State;

use crate::commands::DirectorySnapshot;
use crate::state::{AppState, CommandError, CommandResult};

pub(crate) fn parse_field(field: &str) -> Result<Field, CommandError> {
    field
        .parse::<Field>()
        .map_err(|err| CommandError::InvalidArgument(err.to_string()))
}

/// Keystroke in a form input: update the value, mark the field touched.
#[tauri::command]
pub fn form_input(
    field: String,
    value: String,
    state: State<'_, AppState>,
) -> CommandResult<DirectorySnapshot> {
    let field = parse_field(&field)?;
    let mut dir = state.directory();
    dir.form_mut().input(field, value);
    Ok(DirectorySnapshot::capture(&dir))
}

/// Submit attempt. Invalid forms reveal all of their errors and add
/// nothing; valid forms append the record and reset.
#[tauri::command]
pub fn form_submit(state: State<'_, AppState>) -> CommandResult<DirectorySnapshot> {
    let mut dir = state.directory();
    let created = dir.submit_form();
    tracing::debug!(created, "form submit handled");
    Ok(DirectorySnapshot::capture(&dir))
}
