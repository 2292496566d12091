//! Settings domain: tunable values loaded from `assets/data/settings.ron`.

mod loader;


pub use loader::{SettingsLoadError, load_game_settings, parse_game_settings};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::camera::CameraSettings;
use crate::controller::ControllerSettings;
use crate::level::LevelSettings;
use crate::player::PlayerTuning;

pub const DEFAULT_SETTINGS_PATH: &str = "assets/data/settings.ron";

/// Every tunable in the game, grouped by domain.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct GameSettings {
    pub controller: ControllerSettings,
    pub player: PlayerTuning,
    pub level: LevelSettings,
    pub camera: CameraSettings,
}

pub struct SettingsPlugin {
    pub path: PathBuf,
}

impl Default for SettingsPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SETTINGS_PATH),
        }
    }
}

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        let settings = match load_game_settings(&self.path) {
            Ok(settings) => {
                info!("Loaded game settings from {}", self.path.display());
                settings
            }
            Err(e) => {
                warn!("{}; using default settings", e);
                GameSettings::default()
            }
        };

        app.register_type::<GameSettings>().insert_resource(settings);
    }
}
