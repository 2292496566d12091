//! Player domain: input handling and player life-cycle hooks.

mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Facing, Player};
pub use resources::{PlayerInput, PlayerTuning};

use bevy::prelude::*;

use crate::controller::ControllerSet;
use crate::player::systems::{apply_player_input, read_input, update_facing};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_systems(
                Update,
                (read_input, apply_player_input)
                    .chain()
                    .in_set(ControllerSet::Intent),
            )
            .add_systems(Update, update_facing.after(ControllerSet::Intent));
    }
}
