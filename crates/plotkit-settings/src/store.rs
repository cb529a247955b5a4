//! Machine profile persistence.
//!
//! Profiles are stored as JSON or TOML, selected by file extension. A
//! missing profile file is not an error: callers get the default profile,
//! matching first-run behavior.

use std::fs;
use std::path::{Path, PathBuf};

use plotkit_core::MachineProfile;
use tracing::{info, warn};

use crate::error::{SettingsError, SettingsResult};

/// Loads and saves machine profiles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileStore;

impl ProfileStore {
    /// Platform default profile path: `<config dir>/plotkit/profile.json`.
    pub fn default_profile_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(base.join("plotkit").join("profile.json"))
    }

    /// Loads a profile from a JSON or TOML file and validates it.
    pub fn load_from_file(path: &Path) -> SettingsResult<MachineProfile> {
        let content = fs::read_to_string(path)?;

        let profile: MachineProfile = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::LoadError(
                "profile file must be .json or .toml".to_string(),
            ));
        };

        profile.validate()?;
        info!(path = %path.display(), "profile loaded");
        Ok(profile)
    }

    /// Loads a profile, falling back to defaults when the file is missing.
    pub fn load_or_default(path: &Path) -> SettingsResult<MachineProfile> {
        if !path.exists() {
            warn!(path = %path.display(), "profile file not found, using defaults");
            return Ok(MachineProfile::default());
        }
        Self::load_from_file(path)
    }

    /// Saves a profile to a JSON or TOML file, creating parent directories
    /// as needed. The profile is validated before anything is written.
    pub fn save_to_file(profile: &MachineProfile, path: &Path) -> SettingsResult<()> {
        profile.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(profile)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(profile)?
        } else {
            return Err(SettingsError::SaveError(
                "profile file must be .json or .toml".to_string(),
            ));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        info!(path = %path.display(), "profile saved");
        Ok(())
    }
}
