//! Settings storage
//!
//! Manages persistence of server settings.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";

/// Photo orientations accepted by the search API
const VALID_ORIENTATIONS: [&str; 3] = ["landscape", "portrait", "squarish"];

/// Server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origin allowed by CORS (the client dev server)
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
    /// Generative-text model name
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
    #[serde(default = "default_unsplash_base_url")]
    pub unsplash_base_url: String,
    /// Photos requested per search (1 - 30)
    #[serde(default = "default_images_per_page")]
    pub images_per_page: u32,
    /// "landscape", "portrait" or "squarish"
    #[serde(default = "default_image_orientation")]
    pub image_orientation: String,
    /// Timeout applied to every upstream request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_gemini_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_unsplash_base_url() -> String {
    DEFAULT_UNSPLASH_BASE_URL.to_string()
}

fn default_images_per_page() -> u32 {
    8
}

fn default_image_orientation() -> String {
    "landscape".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origin: default_allowed_origin(),
            gemini_model: default_gemini_model(),
            gemini_base_url: default_gemini_base_url(),
            unsplash_base_url: default_unsplash_base_url(),
            images_per_page: default_images_per_page(),
            image_orientation: default_image_orientation(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerSettings {
    /// Validate settings values
    ///
    /// Ensures all parameters are within acceptable ranges, replacing blanks with defaults.
    pub fn validate(&mut self) {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }

        if self.port == 0 {
            self.port = DEFAULT_PORT;
        }

        if self.allowed_origin.trim().is_empty() {
            self.allowed_origin = default_allowed_origin();
        }

        if self.gemini_model.trim().is_empty() {
            self.gemini_model = default_gemini_model();
        }

        if self.gemini_base_url.trim().is_empty() {
            self.gemini_base_url = default_gemini_base_url();
        }
        self.gemini_base_url = self.gemini_base_url.trim_end_matches('/').to_string();

        if self.unsplash_base_url.trim().is_empty() {
            self.unsplash_base_url = default_unsplash_base_url();
        }
        self.unsplash_base_url = self.unsplash_base_url.trim_end_matches('/').to_string();

        self.images_per_page = self.images_per_page.clamp(1, 30);

        if !VALID_ORIENTATIONS.contains(&self.image_orientation.as_str()) {
            tracing::warn!(
                "Unknown image orientation '{}', using landscape",
                self.image_orientation
            );
            self.image_orientation = default_image_orientation();
        }

        self.request_timeout_secs = self.request_timeout_secs.clamp(1, 300);
    }

    /// Address string suitable for binding a listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from the data directory
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> ServerSettings {
    match get_settings_path() {
        Ok(path) => load_settings_from(&path),
        Err(e) => {
            tracing::warn!("Failed to resolve settings path, using defaults: {}", e);
            ServerSettings::default()
        }
    }
}

/// Load settings from an explicit path, falling back to defaults on any error
pub fn load_settings_from(path: &Path) -> ServerSettings {
    match load_settings_internal(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            ServerSettings::default()
        }
    }
}

/// Internal settings loading with error propagation
fn load_settings_internal(path: &Path) -> Result<ServerSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(ServerSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: ServerSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to an explicit path
pub fn save_settings_to(settings: &ServerSettings, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}
