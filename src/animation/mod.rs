//! Animation domain: boolean parameters derived from locomotion state.

mod components;
mod systems;


pub use components::AnimationFlags;

use bevy::prelude::*;

use crate::animation::systems::update_animation_flags;
use crate::core::LocomotionSet;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            update_animation_flags.in_set(LocomotionSet::Animation),
        );
    }
}
