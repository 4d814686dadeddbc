//! Config domain: on-disk shape of the tuning file.

use serde::{Deserialize, Serialize};

use crate::camera::CameraTuning;
use crate::cover::CoverTuning;
use crate::movement::MovementTuning;

pub const TUNING_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Tuning (tuning.ron)
// ============================================================================

/// Every section is optional; missing fields take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningFile {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub cover: CoverTuning,
    pub camera: CameraTuning,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            movement: MovementTuning::default(),
            cover: CoverTuning::default(),
            camera: CameraTuning::default(),
        }
    }
}
