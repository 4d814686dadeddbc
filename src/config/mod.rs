//! Config domain: tuning loaded from `assets/data/tuning.ron`.

mod data;
mod loader;
mod validation;


pub use data::{TUNING_SCHEMA_VERSION, TuningFile};
pub use loader::{ConfigLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

pub const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, apply_tuning_file);
    }
}

/// Loads the tuning file and installs its sections as resources, ahead of
/// anything spawned at Startup.
fn apply_tuning_file(mut commands: Commands) {
    let tuning = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("[CONFIG] Loaded tuning from {}", TUNING_PATH);
            tuning
        }
        Err(e) => {
            warn!("[CONFIG] {}; using built-in tuning", e);
            TuningFile::default()
        }
    };

    for error in validate_tuning(&tuning) {
        error!("[CONFIG] {}", error);
    }

    commands.insert_resource(tuning.movement);
    commands.insert_resource(tuning.cover);
    commands.insert_resource(tuning.camera);
}
