//! Controller domain: kinematic character movement and collision resolution.

mod components;
mod geometry;
mod parameters;
mod resolver;
mod resources;
mod systems;


pub use components::{
    CharacterController2d, GameLayer, PhysicsVolume, collider_half_extents,
};
pub use geometry::{AvianGeometry, GeometryQuery, ProbeRay, RayHit, TracingGeometry};
pub use parameters::{
    ControllerConfigError, ControllerSettings, JumpPolicy, MovementParameters, ParameterSource,
    RayAxis, VelocityClamp,
};
pub use resolver::{
    CONTACT_EPSILON, ControllerState, HORIZONTAL_DEAD_ZONE, KinematicResolver, ProbeBounds,
    Resolution, surface_angle,
};
pub use resources::ProbeTraces;

use avian2d::spatial_query::SpatialQueryPlugin;
use bevy::prelude::*;

use crate::controller::systems::{apply_physics_volumes, tick_controllers};

/// Ordering for systems that feed or read the controller each frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Forces and jumps requested this frame.
    Intent,
    /// Gravity, resolution and the position update.
    Move,
}

pub struct ControllerPlugin;

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MovementParameters>()
            .register_type::<JumpPolicy>()
            .init_resource::<ProbeTraces>()
            .configure_sets(Update, (ControllerSet::Intent, ControllerSet::Move).chain())
            .add_systems(
                Update,
                (apply_physics_volumes, tick_controllers)
                    .chain()
                    .in_set(ControllerSet::Move),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            systems::draw_probe_rays.after(ControllerSet::Move),
        );
    }

    fn finish(&self, app: &mut App) {
        // Ray probing has no fallback without a spatial query pipeline.
        if !app.is_plugin_added::<SpatialQueryPlugin>() {
            panic!("ControllerPlugin requires avian2d's PhysicsPlugins");
        }
    }
}
