//! Player domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_speed: f32,
    /// How quickly horizontal speed eases toward the input target on the ground.
    pub ground_acceleration: f32,
    pub air_acceleration: f32,
    /// Upward speed given to the body when the player dies.
    pub death_launch_speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_speed: 8.0,
            ground_acceleration: 10.0,
            air_acceleration: 5.0,
            death_launch_speed: 20.0,
        }
    }
}

impl PlayerTuning {
    /// Horizontal velocity for this frame, eased from `current` toward `axis * max_speed`.
    pub fn horizontal_velocity(&self, current: f32, axis: f32, grounded: bool, dt: f32) -> f32 {
        let acceleration = if grounded {
            self.ground_acceleration
        } else {
            self.air_acceleration
        };
        let target = axis * self.max_speed;
        let t = (dt * acceleration).clamp(0.0, 1.0);
        current + (target - current) * t
    }
}

#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    /// -1 left, 0 idle, 1 right.
    pub axis: f32,
    pub jump_just_pressed: bool,
}
