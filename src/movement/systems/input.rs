//! Movement domain: input sampling for locomotion.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{FirstPersonToggled, MovementInput, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut MovementInput, With<Player>>,
) {
    // Lateral axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Forward axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let axis = Vec2::new(x, y);
    for mut input in &mut query {
        // Only replace on change so the value persists like an input callback
        if input.axis != axis {
            input.set(axis);
        }
    }
}

/// Hold the right mouse button to look in first person.
pub(crate) fn read_first_person_toggle(
    mouse: Res<ButtonInput<MouseButton>>,
    mut toggles: MessageWriter<FirstPersonToggled>,
) {
    if mouse.just_pressed(MouseButton::Right) {
        toggles.write(FirstPersonToggled::Enter);
    }
    if mouse.just_released(MouseButton::Right) {
        toggles.write(FirstPersonToggled::Exit);
    }
}
