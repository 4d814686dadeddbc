//! Core domain: frame ordering, the demo level, and startup wiring checks.

mod level;
mod wiring;


pub use wiring::{WiringCounts, WiringError, check_wiring};

use bevy::prelude::*;

use crate::core::level::spawn_level;
use crate::core::wiring::verify_wiring;

/// Per-frame locomotion order. Configured as a chain in `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    /// Keyboard, mouse, and toggle input
    Input,
    /// Mode transitions and free-roam motion
    Movement,
    /// Cover entry, slide, and edge checks
    Cover,
    /// Rig arbitration and framing
    Camera,
    /// Animation parameters
    Animation,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                LocomotionSet::Input,
                LocomotionSet::Movement,
                LocomotionSet::Cover,
                LocomotionSet::Camera,
                LocomotionSet::Animation,
            )
                .chain(),
        )
        .add_systems(Startup, spawn_level)
        .add_systems(PostStartup, verify_wiring);
    }
}
