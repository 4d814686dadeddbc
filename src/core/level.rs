//! Core domain: demo level with cover walls, solid walls, and camera zones.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::{CameraRig, CameraZone, DefaultExploreRig, RigKind};
use crate::physics::{GameLayer, SurfaceKind};

const WALL_HEIGHT: f32 = 1.2;
const WALL_THICKNESS: f32 = 0.4;

/// A wall placed by its centre on the floor, length along local x.
struct WallPiece {
    center: Vec2,
    length: f32,
    height: f32,
    yaw: f32,
    surface: SurfaceKind,
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let cover_color = Color::srgb(0.55, 0.45, 0.3);
    let solid_color = Color::srgb(0.25, 0.25, 0.35);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let zone_layers = CollisionLayers::new(GameLayer::CameraZone, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Cuboid::new(40.0, 0.2, 40.0))),
        MeshMaterial3d(materials.add(ground_color)),
        Transform::from_xyz(0.0, -0.1, 0.0),
        RigidBody::Static,
        Collider::cuboid(40.0, 0.2, 40.0),
        ground_layers,
    ));

    let walls = [
        // Low cover wall facing the spawn point
        WallPiece {
            center: Vec2::new(0.0, 0.0),
            length: 6.0,
            height: WALL_HEIGHT,
            yaw: 0.0,
            surface: SurfaceKind::Cover,
        },
        // Short crate, both edges reachable without sliding far
        WallPiece {
            center: Vec2::new(-7.0, 3.0),
            length: 1.6,
            height: WALL_HEIGHT,
            yaw: 0.0,
            surface: SurfaceKind::Cover,
        },
        // Angled cover on the far side
        WallPiece {
            center: Vec2::new(6.0, -6.0),
            length: 5.0,
            height: WALL_HEIGHT,
            yaw: std::f32::consts::FRAC_PI_4,
            surface: SurfaceKind::Cover,
        },
        // Tall pillar the player bumps into but never attaches to
        WallPiece {
            center: Vec2::new(7.0, 4.0),
            length: 2.0,
            height: 4.0,
            yaw: 0.0,
            surface: SurfaceKind::Solid,
        },
    ];

    // Boundary
    let boundary = [
        (Vec2::new(0.0, -20.0), 0.0),
        (Vec2::new(0.0, 20.0), 0.0),
        (Vec2::new(-20.0, 0.0), std::f32::consts::FRAC_PI_2),
        (Vec2::new(20.0, 0.0), std::f32::consts::FRAC_PI_2),
    ]
    .map(|(center, yaw)| WallPiece {
        center,
        length: 40.0,
        height: 3.0,
        yaw,
        surface: SurfaceKind::Solid,
    });

    for wall in walls.iter().chain(boundary.iter()) {
        let color = match wall.surface {
            SurfaceKind::Cover => cover_color,
            SurfaceKind::Solid => solid_color,
        };

        commands.spawn((
            Name::new(format!("{:?} Wall", wall.surface)),
            wall.surface,
            Mesh3d(meshes.add(Cuboid::new(wall.length, wall.height, WALL_THICKNESS))),
            MeshMaterial3d(materials.add(color)),
            Transform::from_xyz(wall.center.x, wall.height / 2.0, wall.center.y)
                .with_rotation(Quat::from_rotation_y(wall.yaw)),
            RigidBody::Static,
            Collider::cuboid(wall.length, wall.height, WALL_THICKNESS),
            wall_layers,
        ));
    }

    // Explore rigs: one over the spawn side, one over the far side
    let near_rig = commands
        .spawn((
            Name::new("Explore Camera (near)"),
            CameraRig::new(RigKind::Explore),
            DefaultExploreRig,
            Camera3d::default(),
            Camera {
                is_active: false,
                ..default()
            },
            Transform::from_xyz(0.0, 9.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id();

    let far_rig = commands
        .spawn((
            Name::new("Explore Camera (far)"),
            CameraRig::new(RigKind::Explore),
            Camera3d::default(),
            Camera {
                is_active: false,
                ..default()
            },
            Transform::from_xyz(-12.0, 9.0, -16.0).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id();

    // Camera zones split the level across the cover wall line
    for (name, rig, z) in [
        ("Camera Zone (near)", near_rig, 10.0),
        ("Camera Zone (far)", far_rig, -10.0),
    ] {
        commands.spawn((
            Name::new(name),
            CameraZone { explore_rig: rig },
            Transform::from_xyz(0.0, 1.0, z),
            Sensor,
            Collider::cuboid(38.0, 2.0, 18.0),
            CollisionEventsEnabled,
            zone_layers,
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!(
        "[LEVEL] Spawned {} walls and 2 camera zones",
        walls.len() + boundary.len()
    );
}
