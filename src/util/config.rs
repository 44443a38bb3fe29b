use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Error as SerdeError;

use crate::domain::{Accent, DEFAULT_DISPLAY_NAME};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "Finanzas";
const APP_NAME: &str = "FinanzasDashboard";

/// User-level presentation settings. Read once at startup, never written back.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_display_name")]
    pub display_name: String,
    #[serde(default)]
    pub accent: Accent,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            display_name: default_display_name(),
            accent: Accent::default(),
        }
    }
}

fn default_display_name() -> String {
    DEFAULT_DISPLAY_NAME.to_string()
}

pub fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Loads the config from the platform config directory. A missing file yields defaults.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match config_file() {
        Some(path) => load_config_from(&path),
        None => Ok(AppConfig::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(err) => return Err(err.into()),
    };
    Ok(serde_json::from_str(&data)?)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] SerdeError),
}
