//! Camera domain: margin-based follow clamped to the level bounds.

mod follow;
mod systems;


pub use follow::{clamp_to_bounds, follow_step};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::systems::follow_player;
use crate::level::LevelSet;

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct CameraSettings {
    /// Distance per axis the player may drift before the camera moves.
    pub margin: Vec2,
    /// Per-axis easing rate toward the player.
    pub smoothing: Vec2,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            margin: Vec2::new(2.0, 1.5),
            smoothing: Vec2::new(4.0, 4.0),
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct CameraFollow {
    pub margin: Vec2,
    pub smoothing: Vec2,
    /// Cleared while the player is dead.
    pub is_following: bool,
}

impl CameraFollow {
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self {
            margin: settings.margin,
            smoothing: settings.smoothing,
            is_following: true,
        }
    }
}

/// World-space area the view must stay inside.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraBounds(pub Rect);

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraSettings>()
            .add_systems(Update, follow_player.after(LevelSet));
    }
}
