//! Level domain: the demo level layout.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::{CameraBounds, CameraFollow};
use crate::controller::{CharacterController2d, GameLayer, MovementParameters, PhysicsVolume};
use crate::level::{Checkpoint, Hazard};
use crate::player::Player;
use crate::settings::GameSettings;

const PIXELS_PER_UNIT: f32 = 32.0;

pub(crate) fn spawn_demo_level(mut commands: Commands, settings: Res<GameSettings>) {
    let platform_color = Color::srgb(0.35, 0.4, 0.35);
    let volume_color = Color::srgba(0.4, 0.6, 0.9, 0.35);
    let hazard_color = Color::srgb(0.85, 0.25, 0.2);
    let checkpoint_color = Color::srgb(0.95, 0.85, 0.3);

    let platform_layers = CollisionLayers::new(GameLayer::Platform, [GameLayer::Player]);
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);
    let hazard_layers = CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]);

    // (center, size, rotation in degrees)
    let platforms = [
        (Vec2::new(0.0, -1.0), Vec2::new(24.0, 2.0), 0.0),
        (Vec2::new(-12.5, 4.0), Vec2::new(1.0, 12.0), 0.0),
        // Within the slope limit, so the lowest sideways ray hands it to the climb hook
        (Vec2::new(14.0, 1.07), Vec2::new(6.0, 1.0), 30.0),
        (Vec2::new(20.0, 2.0), Vec2::new(8.0, 2.0), 0.0),
        (Vec2::new(38.0, -1.0), Vec2::new(10.0, 2.0), 0.0),
        // Too steep to climb
        (Vec2::new(40.0, 1.5), Vec2::new(4.0, 0.5), 80.0),
        (Vec2::new(43.5, 4.0), Vec2::new(1.0, 12.0), 0.0),
    ];

    for (center, size, degrees) in platforms {
        commands.spawn((
            Sprite {
                color: platform_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0))
                .with_rotation(Quat::from_rotation_z(f32::to_radians(degrees))),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            platform_layers,
        ));
    }

    // Low gravity zone above the first stretch.
    let floaty = MovementParameters {
        gravity: -8.0,
        jump_magnitude: 6.0,
        ..settings.controller.default_parameters
    };
    commands.spawn((
        PhysicsVolume { parameters: floaty },
        Sprite {
            color: volume_color,
            custom_size: Some(Vec2::new(6.0, 8.0)),
            ..default()
        },
        Transform::from_xyz(5.0, 4.0, -1.0),
        RigidBody::Static,
        Collider::rectangle(6.0, 8.0),
        Sensor,
        sensor_layers,
    ));

    // Pit between the upper ledge and the last floor.
    commands.spawn((
        Hazard,
        Sprite {
            color: hazard_color,
            custom_size: Some(Vec2::new(9.0, 1.0)),
            ..default()
        },
        Transform::from_xyz(28.5, -3.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(9.0, 1.0),
        Sensor,
        hazard_layers,
    ));

    for position in [Vec2::new(-10.0, 1.5), Vec2::new(20.0, 4.5), Vec2::new(36.0, 1.5)] {
        commands.spawn((
            Checkpoint,
            Sprite {
                color: checkpoint_color,
                custom_size: Some(Vec2::new(0.25, 2.0)),
                ..default()
            },
            Transform::from_translation(position.extend(-1.0)),
        ));
    }

    spawn_player(&mut commands, &settings);

    commands.insert_resource(CameraBounds(Rect::new(-13.0, -4.0, 44.0, 16.0)));
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
        CameraFollow::from_settings(&settings.camera),
        Transform::from_xyz(-10.0, 2.0, 0.0),
    ));
}

fn spawn_player(commands: &mut Commands, settings: &GameSettings) {
    let collider = Collider::rectangle(1.0, 2.0);
    let controller = match CharacterController2d::from_collider(&settings.controller, &collider) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Cannot build player controller: {}", e);
            return;
        }
    };

    commands.spawn((
        Player::default(),
        controller,
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(1.0, 2.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 1.0),
        // Physics: movement is resolved by the controller, the body only reports sensor contacts
        (
            RigidBody::Dynamic,
            collider,
            LockedAxes::ROTATION_LOCKED,
            GravityScale(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Sensor, GameLayer::Hazard]),
        ),
    ));
}
