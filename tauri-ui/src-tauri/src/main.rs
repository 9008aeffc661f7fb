//! Provider Directory Desktop UI - Tauri Application
//!
//! Entry point for the Tauri application. Initializes logging and the
//! application state, then registers all commands. All directory logic
//! lives in `provdir_core`; the webview is a dumb renderer of the
//! snapshots the commands return.

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod commands;
mod state;


use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_subscriber::Layer;

fn main() {
    // Initialize tracing (console + rolling file)
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "provider_directory_ui=info,provdir_core=info".into());

    let mut _log_guard: Option<tracing_appender::non_blocking::WorkerGuard> = None;
    let file_layer = match ensure_logs_dir() {
        Ok(log_dir) => {
            let file_appender = tracing_appender::rolling::daily(log_dir, "provdir-ui.log");
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
            _log_guard = Some(guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(file_writer)
                    .with_ansi(false)
                    .with_filter(env_filter.clone()),
            )
        }
        Err(err) => {
            eprintln!("Warning: failed to create logs directory: {}", err);
            None
        }
    };

    let registry = tracing_subscriber::registry().with(file_layer);
    let console_layer = tracing_subscriber::fmt::layer().with_filter(env_filter.clone());
    registry.with(console_layer).init();

    tracing::info!("Starting Provider Directory UI");

    // Initialize application state
    let app_state = match AppState::new() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize application state: {}", e);
            eprintln!("Failed to initialize application state: {}", e);
            std::process::exit(1);
        }
    };

    // Build and run Tauri application
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // Snapshot
            commands::directory_snapshot,
            // Creation form
            commands::form::form_input,
            commands::form::form_submit,
            // Filter / sort / display mode
            commands::view::filter_set,
            commands::view::sort_select,
            commands::view::sort_toggle_direction,
            commands::view::sort_header_click,
            commands::view::view_toggle_mode,
            // Selection and removal
            commands::view::row_toggle_select,
            commands::view::selection_toggle_all,
            commands::view::selection_remove,
            // Inline cell editing
            commands::edit::edit_begin,
            commands::edit::edit_input,
            commands::edit::edit_commit,
            commands::edit::edit_cancel,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

fn provdir_home() -> Option<std::path::PathBuf> {
    if let Ok(override_path) = std::env::var(provdir_core::storage::HOME_ENV) {
        return Some(std::path::PathBuf::from(override_path));
    }
    dirs::home_dir().map(|h| h.join(".provider_directory"))
}

fn ensure_logs_dir() -> std::io::Result<std::path::PathBuf> {
    let home = provdir_home().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
    })?;
    let dir = home.join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
