use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_kinematics::{camera, controller, level, player, settings};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer Kinematics".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            settings::SettingsPlugin::default(),
            controller::ControllerPlugin,
            player::PlayerPlugin,
            level::LevelPlugin,
            camera::CameraPlugin,
        ))
        .run();
}
