//! Runtime scene parameters.
//!
//! Defaults come from [`crate::constants`]; hosts override individual fields
//! with struct update syntax before building a [`crate::PulseScene`].

use crate::constants::*;
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Where the heart first appears.
    pub initial_position: Vec3,
    /// Degrees of spin about +Y applied every frame.
    pub rotation_step_deg: f32,
    pub floor_depth: f32,
    pub yaw_limit: f32,
    pub pitch_limit: f32,
    /// Score and relocate the heart when the trigger fires while gazing at it.
    pub hunt_mode: bool,
    pub sound_file: String,
    pub trigger_vibration: Duration,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial_position: initial_model_position(),
            rotation_step_deg: TIME_DELTA,
            floor_depth: FLOOR_DEPTH,
            yaw_limit: YAW_LIMIT,
            pitch_limit: PITCH_LIMIT,
            hunt_mode: false,
            sound_file: SOUND_FILE.to_string(),
            trigger_vibration: Duration::from_millis(TRIGGER_VIBRATE_MS),
            z_near: Z_NEAR,
            z_far: Z_FAR,
        }
    }
}

impl SceneConfig {
    /// Distance from the viewer to the initial heart position.
    pub fn initial_distance(&self) -> f32 {
        self.initial_position.length()
    }
}

/// Stereo rig parameters used by hosts that synthesise eyes themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StereoParams {
    pub ipd: f32,
    pub fov_y_radians: f32,
}

impl Default for StereoParams {
    fn default() -> Self {
        Self {
            ipd: INTERPUPILLARY_DISTANCE,
            fov_y_radians: EYE_FOV_Y_DEGREES.to_radians(),
        }
    }
}
