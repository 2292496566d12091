//! Player domain: tests for movement easing and kill/respawn hooks.

use bevy::prelude::*;

use super::{Facing, Player, PlayerTuning};
use crate::controller::{CharacterController2d, ControllerSettings};

fn controller() -> CharacterController2d {
    CharacterController2d::new(&ControllerSettings::default(), Vec2::new(0.5, 1.0)).unwrap()
}

#[test]
fn test_horizontal_velocity_uses_ground_and_air_acceleration() {
    let tuning = PlayerTuning::default();

    // dt * 10 = 0.5 of the way to 8 on the ground.
    let grounded = tuning.horizontal_velocity(0.0, 1.0, true, 0.05);
    assert!((grounded - 4.0).abs() < 1e-5);

    // dt * 5 = 0.25 of the way in the air.
    let airborne = tuning.horizontal_velocity(0.0, 1.0, false, 0.05);
    assert!((airborne - 2.0).abs() < 1e-5);
}

#[test]
fn test_horizontal_velocity_never_overshoots() {
    let tuning = PlayerTuning::default();

    let long_frame = tuning.horizontal_velocity(0.0, -1.0, true, 1.0);
    assert_eq!(long_frame, -8.0);

    let idle = tuning.horizontal_velocity(6.0, 0.0, true, 1.0);
    assert_eq!(idle, 0.0);
}

#[test]
fn test_horizontal_velocity_zero_dt_keeps_current() {
    let tuning = PlayerTuning::default();
    assert_eq!(tuning.horizontal_velocity(3.5, 1.0, true, 0.0), 3.5);
}

#[test]
fn test_kill_disables_collisions_and_launches() {
    let tuning = PlayerTuning::default();
    let mut player = Player::default();
    let mut controller = controller();
    controller.set_force(Vec2::new(5.0, -3.0));

    player.kill(&mut controller, &tuning);

    assert!(player.is_dead);
    assert!(!controller.handle_collisions);
    assert_eq!(controller.velocity(), Vec2::new(0.0, tuning.death_launch_speed));
}

#[test]
fn test_respawn_restores_player() {
    let tuning = PlayerTuning::default();
    let mut player = Player {
        facing: Facing::Left,
        is_dead: false,
    };
    let mut controller = controller();
    let mut transform = Transform::from_xyz(40.0, -30.0, 2.0);

    player.kill(&mut controller, &tuning);
    player.respawn_at(&mut controller, &mut transform, Vec2::new(1.0, 3.0));

    assert!(!player.is_dead);
    assert_eq!(player.facing, Facing::Right);
    assert!(controller.handle_collisions);
    assert_eq!(controller.velocity(), Vec2::ZERO);
    assert_eq!(transform.translation, Vec3::new(1.0, 3.0, 2.0));
}
