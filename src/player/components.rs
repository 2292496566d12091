//! Player domain: the player marker and its life-cycle hooks on the controller.

use bevy::prelude::*;

use crate::controller::CharacterController2d;
use crate::player::PlayerTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

#[derive(Component, Debug, Default)]
pub struct Player {
    pub facing: Facing,
    pub is_dead: bool,
}

impl Player {
    /// Stop colliding and pop the body upward. Input is ignored until respawn.
    pub fn kill(&mut self, controller: &mut CharacterController2d, tuning: &PlayerTuning) {
        self.is_dead = true;
        controller.handle_collisions = false;
        controller.set_force(Vec2::new(0.0, tuning.death_launch_speed));
    }

    pub fn respawn_at(
        &mut self,
        controller: &mut CharacterController2d,
        transform: &mut Transform,
        spawn_point: Vec2,
    ) {
        self.facing = Facing::Right;
        self.is_dead = false;
        controller.handle_collisions = true;
        controller.set_force(Vec2::ZERO);
        transform.translation = spawn_point.extend(transform.translation.z);
    }
}
