//! Camera domain: per-frame follow.

use bevy::prelude::*;

use crate::camera::{CameraBounds, CameraFollow, clamp_to_bounds, follow_step};
use crate::player::Player;

pub(crate) fn follow_player(
    time: Res<Time>,
    bounds: Option<Res<CameraBounds>>,
    player_query: Query<&Transform, (With<Player>, Without<CameraFollow>)>,
    mut camera_query: Query<(&mut Transform, &CameraFollow, &Projection)>,
) {
    let Some(player_transform) = player_query.iter().next() else {
        return;
    };
    let target = player_transform.translation.truncate();

    for (mut transform, follow, projection) in &mut camera_query {
        if !follow.is_following {
            continue;
        }

        let mut position = follow_step(
            transform.translation.truncate(),
            target,
            follow.margin,
            follow.smoothing,
            time.delta_secs(),
        );

        if let Some(bounds) = &bounds {
            let half_view = match projection {
                Projection::Orthographic(ortho) => ortho.area.half_size(),
                _ => Vec2::ZERO,
            };
            position = clamp_to_bounds(position, half_view, bounds.0);
        }

        transform.translation = position.extend(transform.translation.z);
    }
}
