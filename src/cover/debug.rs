//! Cover domain: probe visualisation for the `dev-tools` build.

use bevy::prelude::*;

use crate::cover::{CoverEdges, CoverState, CoverTuning, edge_probe_origin};
use crate::movement::{MoveDirection, MovementTuning, Player, normalized_move};

const OPEN: Color = Color::srgb(0.95, 0.3, 0.2);
const BLOCKED: Color = Color::srgb(0.3, 0.9, 0.4);

/// Draws the side-openness and edge-exit probes of characters in cover.
pub(crate) fn draw_cover_probes(
    mut gizmos: Gizmos,
    tuning: Res<CoverTuning>,
    movement_tuning: Res<MovementTuning>,
    query: Query<(&Transform, &CoverState, &CoverEdges, &MoveDirection), With<Player>>,
) {
    for (transform, cover, edges, direction) in &query {
        let Some(frame) = cover.frame else {
            continue;
        };
        let position = transform.translation;
        let reach = -frame.wall_normal * tuning.wall_check_distance;

        for (side, open) in [(1.0, edges.0.right_open), (-1.0, edges.0.left_open)] {
            let origin = position + frame.wall_tangent * (side * tuning.near_edge_distance);
            gizmos.line(origin, origin + reach, if open { OPEN } else { BLOCKED });
        }

        // The edge-exit probe only runs while there is input
        let Some(direction) = normalized_move(direction.0, tuning.min_move_magnitude) else {
            continue;
        };
        let origin = edge_probe_origin(
            &frame,
            position,
            direction.dot(*frame.wall_tangent),
            tuning.edge_probe_offset(movement_tuning.capsule_radius),
        );
        gizmos.line(origin, origin + reach, Color::WHITE);
    }
}
