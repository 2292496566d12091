//! Controller domain: per-frame controller update and physics volume tracking.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::geometry::{AvianGeometry, TracingGeometry};
use crate::controller::resolver::ControllerState;
use crate::controller::{CharacterController2d, PhysicsVolume, ProbeTraces};

pub(crate) fn tick_controllers(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut traces: ResMut<ProbeTraces>,
    mut query: Query<(Entity, &mut CharacterController2d, &mut Transform)>,
) {
    let dt = time.delta_secs();
    let traces = &mut *traces;
    traces.rays.clear();

    for (entity, mut controller, mut transform) in &mut query {
        let geometry = AvianGeometry::new(&spatial_query, entity);
        let previous = *controller.state();

        if traces.enabled {
            let tracing = TracingGeometry::new(&geometry, &mut traces.rays);
            controller.tick(&mut transform, dt, &tracing);
        } else {
            controller.tick(&mut transform, dt, &geometry);
        }

        log_contact_changes(entity, &previous, controller.state());
    }
}

fn log_contact_changes(entity: Entity, previous: &ControllerState, current: &ControllerState) {
    if current.is_grounded() && !previous.is_grounded() {
        debug!("{:?} landed", entity);
    } else if !current.is_grounded() && previous.is_grounded() {
        debug!("{:?} left ground", entity);
    }

    if current.colliding_left != previous.colliding_left
        || current.colliding_right != previous.colliding_right
    {
        debug!(
            "{:?} wall contact: left={}, right={}",
            entity, current.colliding_left, current.colliding_right
        );
    }
}

/// Swap movement parameters as controllers enter and leave physics volumes.
///
/// Exits are applied before entries so moving straight from one volume into
/// another in a single frame keeps the second volume's parameters.
pub(crate) fn apply_physics_volumes(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    volume_query: Query<&PhysicsVolume>,
    mut controller_query: Query<&mut CharacterController2d>,
) {
    for event in collision_end_events.read() {
        for (volume_entity, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            if volume_query.get(volume_entity).is_err() {
                continue;
            }
            let Ok(mut controller) = controller_query.get_mut(other) else {
                continue;
            };

            if controller.clear_override(volume_entity) {
                debug!("{:?} left physics volume {:?}", other, volume_entity);
            }
        }
    }

    for event in collision_start_events.read() {
        for (volume_entity, other) in [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ] {
            let Ok(volume) = volume_query.get(volume_entity) else {
                continue;
            };
            let Ok(mut controller) = controller_query.get_mut(other) else {
                continue;
            };

            controller.set_override(volume_entity, volume.parameters);
            debug!(
                "{:?} entered physics volume {:?}: gravity={}, jump_policy={:?}",
                other, volume_entity, volume.parameters.gravity, volume.parameters.jump_policy
            );
        }
    }
}

#[cfg(feature = "dev-tools")]
pub(crate) fn draw_probe_rays(traces: Res<ProbeTraces>, mut gizmos: Gizmos) {
    let miss_color = Color::srgb(0.9, 0.2, 0.2);
    let hit_color = Color::srgb(0.2, 0.9, 0.3);

    for ray in &traces.rays {
        let color = if ray.hit { hit_color } else { miss_color };
        gizmos.line_2d(ray.origin, ray.end, color);
    }
}
