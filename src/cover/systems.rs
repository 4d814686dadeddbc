//! Cover domain: systems wiring the attachment engine to avian.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::cover::{
    CoverAttachment, CoverEdges, CoverEnteredEvent, CoverExitReason, CoverExitedEvent,
    CoverOutcome, CoverState, CoverTuning,
};
use crate::movement::{MoveDirection, MovementMode, MovementModeState, MovementTuning, Player};
use crate::physics::{FrameContacts, KinematicMotor, SpatialWallProbe, SurfaceKind, wall_filter};

/// Drops a frame left behind when the character switched mode elsewhere
/// (first person entered while in cover).
pub(crate) fn release_stale_cover(
    mut query: Query<(Entity, &MovementModeState, &mut CoverState), With<Player>>,
    mut exited: MessageWriter<CoverExitedEvent>,
) {
    for (entity, state, mut cover) in &mut query {
        if state.mode() != MovementMode::Cover && cover.is_attached() {
            cover.frame = None;
            info!("[COVER] Released cover on switch to {:?}", state.mode());
            exited.write(CoverExitedEvent {
                entity,
                reason: CoverExitReason::ModeChanged,
            });
        }
    }
}

pub(crate) fn drive_cover(
    time: Res<Time>,
    tuning: Res<CoverTuning>,
    movement_tuning: Res<MovementTuning>,
    spatial_query: SpatialQuery,
    surfaces: Query<&SurfaceKind>,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &Collider,
            &mut MovementModeState,
            &mut CoverState,
            &MoveDirection,
            &FrameContacts,
        ),
        With<Player>,
    >,
    mut entered: MessageWriter<CoverEnteredEvent>,
    mut exited: MessageWriter<CoverExitedEvent>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, collider, mut state, mut cover, direction, contacts) in &mut query
    {
        let probe = SpatialWallProbe::new(&spatial_query, wall_filter(entity));
        let mut motor = KinematicMotor::new(
            &spatial_query,
            &mut *transform,
            collider,
            wall_filter(entity),
            |hit| surfaces.get(hit).copied().unwrap_or_default(),
        );

        let mut attachment = CoverAttachment {
            tuning: &tuning,
            capsule_radius: movement_tuning.capsule_radius,
            probe: &probe,
            motor: &mut motor,
        };

        match attachment.tick(&mut state, &mut cover, direction.0, &contacts.0, dt) {
            CoverOutcome::Entered { frame, snapped } => {
                info!(
                    "[COVER] Entered cover: normal={:?}, snapped={}",
                    *frame.wall_normal, snapped
                );
                entered.write(CoverEnteredEvent {
                    entity,
                    wall_normal: frame.wall_normal,
                    snapped,
                });
            }
            CoverOutcome::Exited(reason) => {
                info!("[COVER] Left cover: {:?}", reason);
                exited.write(CoverExitedEvent { entity, reason });
            }
            CoverOutcome::Idle | CoverOutcome::Held | CoverOutcome::Slid { .. } => {}
        }
    }
}

/// Publishes side-openness for the camera arbiter.
pub(crate) fn publish_cover_edges(
    tuning: Res<CoverTuning>,
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &CoverState, &mut CoverEdges), With<Player>>,
) {
    for (entity, transform, cover, mut edges) in &mut query {
        let probe = SpatialWallProbe::new(&spatial_query, wall_filter(entity));
        let report = cover.edge_report(transform.translation, &tuning, &probe);

        if report.is_near_edge() && !edges.0.is_near_edge() {
            debug!(
                "[COVER] Near edge: right_open={}, left_open={}",
                report.right_open, report.left_open
            );
        }
        edges.0 = report;
    }
}
