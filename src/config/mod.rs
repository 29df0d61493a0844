//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "FACADE_SETTINGS_PATH";

/// Load settings from the first settings file found, or defaults, then apply the environment
pub fn load() -> Result<Settings> {
    let explicit = std::env::var_os(SETTINGS_PATH_ENV).map(PathBuf::from);
    let mut settings = read_settings(explicit)?;
    settings.merge_env();
    Ok(settings)
}

/// Read `explicit` if it exists, else the first default location, else defaults
fn read_settings(explicit: Option<PathBuf>) -> Result<Settings> {
    match find_settings_file(explicit) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)
        }
        None => {
            info!("No settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}

fn find_settings_file(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| p.exists()) {
        return Some(path);
    }

    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/opensearch-facade/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("opensearch-facade/settings.yml"));
    }

    paths.into_iter().find(|p| p.exists())
}
