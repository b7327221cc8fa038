use crate::models::settings::PickerSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "pickers.toml";

/// Reads picker settings from a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for `pickers.toml` in the platform config directory.
    pub fn from_default_location() -> Option<Self> {
        resolve_settings_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings file. A missing file yields defaults.
    pub fn load(&self) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::info!("No settings file at {:?}, using defaults", self.path);
            return Ok(PickerSettings::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {:?}", self.path))?;
        let settings = PickerSettings::from_toml(&content)
            .with_context(|| format!("Failed to parse settings file {:?}", self.path))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        log::info!("Loaded settings from {:?}", self.path);
        Ok(settings)
    }
}

fn resolve_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "RustPickers", "RustPickers")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// Load settings, logging and falling back to defaults on any error.
pub fn load_settings_or_default(service: Option<&SettingsService>) -> PickerSettings {
    let Some(service) = service else {
        log::warn!("No config directory available, using default settings");
        return PickerSettings::default();
    };
    match service.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {:#}, using defaults", e);
            PickerSettings::default()
        }
    }
}
