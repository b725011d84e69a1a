//! Application configuration management.
//!
//! The only thing Navi persists between sessions is the user's preferences;
//! roster and connection data reset to seed values on every start. Settings
//! load through figment from `config.toml` next to the binary, falling back
//! to defaults (and writing them out) when the file is missing or invalid.

use crate::theme::ThemeVariant;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write {CONFIG_PATH}: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub theme: ThemeVariant,
    pub workspace_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            workspace_name: "My Workspace".to_string(),
        }
    }
}

impl Settings {
    /// Load persisted settings, creating a default config file if none exists.
    pub fn new() -> Result<Self, SettingsError> {
        let figment = Figment::new().merge(Toml::file(CONFIG_PATH));

        match figment.extract() {
            Ok(settings) => Ok(settings),
            Err(_) => {
                let default_settings = Settings::default();
                default_settings.save()?;
                Ok(default_settings)
            }
        }
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(CONFIG_PATH, toml_string)?;
        Ok(())
    }

    /// Flip the theme preference and persist it.
    pub fn toggle_theme(&mut self) -> Result<(), SettingsError> {
        self.theme = match self.theme {
            ThemeVariant::NaviDark => ThemeVariant::NaviLight,
            ThemeVariant::NaviLight => ThemeVariant::NaviDark,
        };
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeVariant::NaviDark);
        assert_eq!(settings.workspace_name, "My Workspace");
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let settings = Settings {
            theme: ThemeVariant::NaviLight,
            workspace_name: "Acme".to_string(),
        };
        let serialized = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.theme, ThemeVariant::NaviLight);
        assert_eq!(parsed.workspace_name, "Acme");
    }
}
