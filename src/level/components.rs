//! Level domain: markers for level objects.

use bevy::prelude::*;

/// Respawn location. Checkpoints are passed in order of increasing x.
#[derive(Component, Debug, Default)]
pub struct Checkpoint;

/// Sensor that kills the player on contact.
#[derive(Component, Debug, Default)]
pub struct Hazard;
