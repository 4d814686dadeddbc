use bevy::prelude::*;

use crate::animation::AnimationFlags;
use crate::movement::{MovementInput, MovementModeState};

pub(crate) fn update_animation_flags(
    mut characters: Query<(&MovementModeState, &MovementInput, &mut AnimationFlags)>,
) {
    for (state, input, mut flags) in &mut characters {
        let next = AnimationFlags::from_state(state, input);
        if *flags != next {
            *flags = next;
        }
    }
}
