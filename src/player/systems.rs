//! Player domain: input sampling and movement intent.

use bevy::prelude::*;

use crate::controller::CharacterController2d;
use crate::player::{Facing, Player, PlayerInput};
use crate::settings::GameSettings;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    input.axis = if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        1.0
    } else if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        -1.0
    } else {
        0.0
    };
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
}

pub(crate) fn apply_player_input(
    time: Res<Time>,
    input: Res<PlayerInput>,
    settings: Res<GameSettings>,
    mut query: Query<(&mut Player, &mut CharacterController2d)>,
) {
    let dt = time.delta_secs();
    let tuning = &settings.player;

    for (mut player, mut controller) in &mut query {
        if player.is_dead {
            controller.set_horizontal_force(0.0);
            continue;
        }

        if input.axis > 0.0 {
            player.facing = Facing::Right;
        } else if input.axis < 0.0 {
            player.facing = Facing::Left;
        }

        let vx = tuning.horizontal_velocity(
            controller.velocity().x,
            input.axis,
            controller.state().is_grounded(),
            dt,
        );
        controller.set_horizontal_force(vx);

        if input.jump_just_pressed && controller.jump() {
            debug!("Jump: vy={}", controller.velocity().y);
        }
    }
}

pub(crate) fn update_facing(mut query: Query<(&Player, &mut Sprite), Changed<Player>>) {
    for (player, mut sprite) in &mut query {
        sprite.flip_x = player.facing == Facing::Left;
    }
}
