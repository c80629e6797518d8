use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ErpDashboard";
const APP_NAME: &str = "ErpDashboard";

pub const ENV_API_URL: &str = "ERP_DASHBOARD_API_URL";
pub const ENV_SNAPSHOT: &str = "ERP_DASHBOARD_SNAPSHOT";
pub const ENV_REFRESH_SECS: &str = "ERP_DASHBOARD_REFRESH_SECS";

/// Minimum accepted auto-refresh period.
pub const MIN_REFRESH_SECS: u64 = 5;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the ERP API, e.g. `http://localhost:3000/api/`.
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// JSON snapshot used when no API is configured.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    /// Auto-refresh period; `None` refreshes only on demand.
    #[serde(default)]
    pub refresh_secs: Option<u64>,
}

impl Settings {
    /// Settings file merged with environment overrides.
    pub fn load() -> Self {
        let mut settings = load_settings_file().unwrap_or_default();
        settings.apply_overrides(|key| std::env::var(key).ok());
        settings.normalize();
        settings
    }

    /// Set-but-blank variables count as unset and keep the file's value.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base_url = Some(url);
        }
        if let Some(path) = lookup(ENV_SNAPSHOT) {
            self.snapshot_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = lookup(ENV_REFRESH_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.refresh_secs = Some(secs),
                Err(err) => warn!(value = %raw, %err, "ignoring invalid {ENV_REFRESH_SECS}"),
            }
        }
    }

    /// Blank strings count as unset; refresh periods are clamped.
    pub fn normalize(&mut self) {
        self.api_base_url = self
            .api_base_url
            .take()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        self.snapshot_path = self
            .snapshot_path
            .take()
            .filter(|path| !path.as_os_str().is_empty());
        self.refresh_secs = match self.refresh_secs {
            Some(0) | None => None,
            Some(secs) => Some(secs.max(MIN_REFRESH_SECS)),
        };
    }
}

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

fn load_settings_file() -> Option<Settings> {
    let path = settings_file()?;
    read_settings(&path)
}

fn read_settings(path: &Path) -> Option<Settings> {
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(settings) => {
            debug!(path = %path.display(), "loaded settings");
            Some(settings)
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "ignoring unreadable settings file");
            None
        }
    }
}

pub fn save_settings(settings: &Settings) -> Result<(), SettingsSaveError> {
    let path = settings_file().ok_or(SettingsSaveError::StorageUnavailable)?;
    write_settings(&path, settings)
}

fn write_settings(path: &Path, settings: &Settings) -> Result<(), SettingsSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
