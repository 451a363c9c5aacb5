use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::state::Theme;

/// Console settings persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub theme: Theme,
}

/// Settings storage.
pub trait ConfigService: Send + Sync {
    fn load(&self) -> Result<AppSettings>;

    fn save(&self, settings: &AppSettings) -> Result<()>;
}

/// Settings stored as JSON on the local disk.
#[derive(Debug, Clone)]
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/geo-atlas/settings.json`, if the platform has a config dir.
    pub fn default_location() -> Option<Self> {
        let dir = dirs::config_dir()?;
        Some(Self::new(dir.join("geo-atlas").join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppSettings> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppSettings::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid settings file {}", self.path.display()))
    }

    fn save(&self, settings: &AppSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        log::debug!("Settings saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("settings.json"));
        assert_eq!(service.load().unwrap(), AppSettings::default());
    }

    #[test]
    fn saved_theme_is_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("nested").join("settings.json"));

        service
            .save(&AppSettings { theme: Theme::Light })
            .unwrap();

        let written = fs::read_to_string(service.path()).unwrap();
        assert!(written.contains("\"theme\": \"light\""));
        assert_eq!(service.load().unwrap().theme, Theme::Light);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"language":"en-US"}"#).unwrap();

        let service = LocalConfigService::new(path);
        assert_eq!(service.load().unwrap().theme, Theme::Dark);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = LocalConfigService::new(path).load().unwrap_err();
        assert!(err.to_string().contains("Invalid settings file"));
    }
}
