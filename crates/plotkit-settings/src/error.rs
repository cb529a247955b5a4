//! Error types for profile persistence.

use std::io;

use plotkit_core::PlotError;
use thiserror::Error;

/// Errors that can occur while loading or saving machine profiles.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The profile file could not be loaded.
    #[error("Failed to load profile: {0}")]
    LoadError(String),

    /// The profile file could not be saved.
    #[error("Failed to save profile: {0}")]
    SaveError(String),

    /// The stored profile fails validation.
    #[error("Invalid profile: {0}")]
    InvalidProfile(#[from] PlotError),

    /// The platform configuration directory could not be resolved.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
