//! Cover domain: wall attachment, lateral slide, and edge detection.

mod components;
#[cfg(feature = "dev-tools")]
mod debug;
mod engine;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{CoverEdges, CoverFrame, CoverState, EdgeReport};
pub use engine::{
    CoverAttachment, CoverExitReason, CoverOutcome, edge_probe_origin, exit_cover,
};
pub use events::{CoverEnteredEvent, CoverExitedEvent};
pub use resources::CoverTuning;

use bevy::prelude::*;

use crate::core::LocomotionSet;
use crate::cover::systems::{drive_cover, publish_cover_edges, release_stale_cover};

pub struct CoverPlugin;

impl Plugin for CoverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CoverTuning>()
            .add_message::<CoverEnteredEvent>()
            .add_message::<CoverExitedEvent>()
            .add_systems(
                Update,
                (release_stale_cover, drive_cover, publish_cover_edges)
                    .chain()
                    .in_set(LocomotionSet::Cover),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            debug::draw_cover_probes.after(LocomotionSet::Cover),
        );
    }
}
