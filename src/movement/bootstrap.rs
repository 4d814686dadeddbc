//! Movement domain: player bootstrap from loaded tuning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementTuning, Player};
use crate::physics::GameLayer;

const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 0.9, 6.0);

/// Spawns the player capsule sized from `MovementTuning`.
/// Runs at Startup, after the tuning file has been applied.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let radius = tuning.capsule_radius;
    let length = tuning.capsule_length;

    info!(
        "Spawning player: radius={}, height={}, move_speed={}",
        radius,
        tuning.capsule_height(),
        tuning.move_speed
    );

    commands.spawn((
        Player,
        Name::new("Player"),
        // Rendering
        Mesh3d(meshes.add(Capsule3d::new(radius, length))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.85, 0.8))),
        // Transform sits at the capsule centre
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Kinematic,
            Collider::capsule(radius, length),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::CameraZone],
            ),
        ),
    ));
}
