//! Application state for Tauri commands.
//!
//! Owns the one [`ProviderDirectory`] behind a mutex. Every command locks,
//! applies its state transition synchronously, and returns a fresh snapshot
//! for the webview to render.

use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use provdir_core::{FileStore, ProviderDirectory, StorageBridge};

/// Application state shared across Tauri commands.
pub struct AppState {
    directory: Mutex<ProviderDirectory>,
}

impl AppState {
    /// Create the state over the default file-backed store
    /// (`$PROVDIR_HOME`, else `~/.provider_directory`).
    pub fn new() -> Result<Self> {
        let bridge = FileStore::open_default().context("Failed to open provider store")?;
        tracing::info!(root = %bridge.root().display(), "provider store opened");
        Ok(Self::with_bridge(Box::new(bridge)))
    }

    /// Create the state over an explicit bridge (tests use an in-memory or
    /// temp-dir store).
    pub fn with_bridge(bridge: Box<dyn StorageBridge + Send>) -> Self {
        Self {
            directory: Mutex::new(ProviderDirectory::open(bridge)),
        }
    }

    /// Lock the directory. A poisoned lock is recovered; no command holds
    /// the guard across anything that can panic halfway through an update.
    pub fn directory(&self) -> MutexGuard<'_, ProviderDirectory> {
        self.directory
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

static_assertions::assert_impl_all!(AppState: Send, Sync);

/// Error type for Tauri commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        CommandError::Internal(err.to_string())
    }
}

impl serde::Serialize for CommandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type for Tauri commands.
pub type CommandResult<T> = Result<T, CommandError>;
