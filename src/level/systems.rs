//! Level domain: checkpoint tracking, hazards and the respawn sequence.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::CameraFollow;
use crate::controller::CharacterController2d;
use crate::level::{Checkpoint, Hazard, LevelProgress, PlayerLife, ScoreTracker};
use crate::player::Player;
use crate::settings::GameSettings;

/// Collect checkpoints once the level is spawned and place the player on the first.
pub(crate) fn setup_level_progress(
    mut commands: Commands,
    checkpoint_query: Query<&Transform, With<Checkpoint>>,
    mut player_query: Query<(&mut Player, &mut CharacterController2d, &mut Transform), Without<Checkpoint>>,
) {
    let progress = LevelProgress::new(
        checkpoint_query
            .iter()
            .map(|transform| transform.translation.truncate())
            .collect(),
    );

    if let Some(spawn_point) = progress.spawn_point() {
        for (mut player, mut controller, mut transform) in &mut player_query {
            player.respawn_at(&mut controller, &mut transform, spawn_point);
        }
    } else {
        warn!("Level has no checkpoints; player stays at its spawn position");
    }

    info!("Level ready with {} checkpoints", progress.checkpoints().len());
    commands.insert_resource(progress);
}

pub(crate) fn track_checkpoints(
    time: Res<Time>,
    settings: Res<GameSettings>,
    mut progress: ResMut<LevelProgress>,
    mut score: ResMut<ScoreTracker>,
    player_query: Query<&Transform, With<Player>>,
) {
    progress.tick(time.delta_secs());

    let Some(transform) = player_query.iter().next() else {
        return;
    };

    let bonus = progress.current_time_bonus(&settings.level);
    if let Some(index) = progress.advance(transform.translation.x, &mut score, &settings.level) {
        info!(
            "Checkpoint {} reached: bonus={}, points={}",
            index, bonus, score.points
        );
    }
}

/// Start the death sequence when the player touches a hazard.
pub(crate) fn detect_hazards(
    mut collision_start_events: MessageReader<CollisionStart>,
    settings: Res<GameSettings>,
    mut life: ResMut<PlayerLife>,
    hazard_query: Query<(), With<Hazard>>,
    mut player_query: Query<(&mut Player, &mut CharacterController2d)>,
    mut camera_query: Query<&mut CameraFollow>,
) {
    for event in collision_start_events.read() {
        let player_entity = if hazard_query.get(event.collider1).is_ok() {
            event.collider2
        } else if hazard_query.get(event.collider2).is_ok() {
            event.collider1
        } else {
            continue;
        };

        let Ok((mut player, mut controller)) = player_query.get_mut(player_entity) else {
            continue;
        };

        if !life.begin_dying(settings.level.respawn_delay) {
            continue;
        }

        player.kill(&mut controller, &settings.player);
        for mut follow in &mut camera_query {
            follow.is_following = false;
        }
        info!("Player killed by hazard, respawning in {}s", settings.level.respawn_delay);
    }
}

pub(crate) fn advance_player_life(
    time: Res<Time>,
    mut life: ResMut<PlayerLife>,
    mut progress: ResMut<LevelProgress>,
    mut score: ResMut<ScoreTracker>,
    mut player_query: Query<(&mut Player, &mut CharacterController2d, &mut Transform)>,
    mut camera_query: Query<&mut CameraFollow>,
) {
    life.advance(time.delta_secs());
    if *life != PlayerLife::Respawning {
        return;
    }

    if let Some(spawn_point) = progress.spawn_point() {
        for (mut player, mut controller, mut transform) in &mut player_query {
            player.respawn_at(&mut controller, &mut transform, spawn_point);
        }
    }

    progress.restart_clock();
    score.reset_points(progress.saved_points());
    for mut follow in &mut camera_query {
        follow.is_following = true;
    }
    life.finish_respawn();

    info!("Player respawned with {} points", score.points);
}
