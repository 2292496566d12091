//! Level domain: checkpoints, score, hazards and respawning.

mod components;
mod resources;
mod spawn;
mod systems;


pub use components::{Checkpoint, Hazard};
pub use resources::{LevelProgress, LevelSettings, PlayerLife, ScoreTracker};

use bevy::prelude::*;

use crate::controller::ControllerSet;
use crate::level::spawn::spawn_demo_level;
use crate::level::systems::{
    advance_player_life, detect_hazards, setup_level_progress, track_checkpoints,
};

/// Level progression systems. Runs after controllers have moved.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelSet;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LevelSettings>()
            .init_resource::<ScoreTracker>()
            .init_resource::<LevelProgress>()
            .init_resource::<PlayerLife>()
            .configure_sets(Update, LevelSet.after(ControllerSet::Move))
            .add_systems(Startup, spawn_demo_level)
            .add_systems(PostStartup, setup_level_progress)
            .add_systems(
                Update,
                (track_checkpoints, detect_hazards, advance_player_life)
                    .chain()
                    .in_set(LevelSet),
            );
    }
}
