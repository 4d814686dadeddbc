mod animation;
mod camera;
mod config;
mod core;
mod cover;
mod movement;
mod physics;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Cover Locomotion".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            config::ConfigPlugin,
            movement::MovementPlugin,
            cover::CoverPlugin,
            camera::CameraPlugin,
            animation::AnimationPlugin,
        ))
        .run();
}
