//! Loader for the RON game settings file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::GameSettings;

/// Error type for settings loading failures.
#[derive(Debug)]
pub struct SettingsLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for SettingsLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for SettingsLoadError {}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse settings from RON text. Missing fields keep their defaults.
pub fn parse_game_settings(contents: &str) -> Result<GameSettings, SettingsLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| SettingsLoadError {
            file: "<inline>".to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn load_game_settings(path: &Path) -> Result<GameSettings, SettingsLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| SettingsLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_game_settings(&contents).map_err(|e| SettingsLoadError {
        file: file_name,
        message: e.message,
    })
}
