use {
    bevy::prelude::*,
    player_components::{InteractInput, InteractionController, MoveInput, Player},
};

/// Keyboard adapter: interact key edges plus WASD / arrow keys as movement axes.
pub fn read_keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut players: Query<(&InteractionController, &mut InteractInput, &mut MoveInput), With<Player>>,
) {
    let axis = |negative: [KeyCode; 2], positive: [KeyCode; 2]| {
        let value = |pair: [KeyCode; 2]| {
            if keys.any_pressed(pair) { 1.0 } else { 0.0 }
        };
        value(positive) - value(negative)
    };
    let movement = Vec2::new(
        axis([KeyCode::KeyA, KeyCode::ArrowLeft], [KeyCode::KeyD, KeyCode::ArrowRight]),
        axis([KeyCode::KeyS, KeyCode::ArrowDown], [KeyCode::KeyW, KeyCode::ArrowUp]),
    );

    for (controller, mut interact, mut move_input) in players.iter_mut() {
        let key = controller.interact_key;
        *interact = InteractInput {
            pressed: keys.just_pressed(key),
            held: keys.pressed(key),
            released: keys.just_released(key),
        };
        move_input.0 = movement;
    }
}
