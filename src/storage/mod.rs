//! Persistent storage
//!
//! This module handles data persistence for the chat transcript and server settings.

pub mod chat;
pub mod settings;

use std::path::PathBuf;
use thiserror::Error;

/// Environment variable that overrides the data directory
pub const DATA_DIR_VAR: &str = "KIKO_DATA_DIR";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine a data directory")]
    NoDataDir,
}

/// Get the application data directory
///
/// Linux: ~/.local/share/kiko, macOS: ~/Library/Application Support/com.kiko.kiko,
/// Windows: %APPDATA%/kiko/kiko/data. `KIKO_DATA_DIR` takes precedence.
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    if let Ok(dir) = std::env::var(DATA_DIR_VAR) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    directories::ProjectDirs::from("com", "kiko", "kiko")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(StorageError::NoDataDir)
}
