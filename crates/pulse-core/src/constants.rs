use glam::{Vec3, Vec4};

// Shared scene/animation tuning constants used by the core and the native frontend.

// Projection planes
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

// Camera sits just in front of the origin looking down -Z
pub const CAMERA_Z: f32 = 0.01;

// Heart spin per frame (degrees about +Y)
pub const TIME_DELTA: f32 = 1.0;

// Gaze cone half-angles (radians, ~6.9 degrees)
pub const YAW_LIMIT: f32 = 0.12;
pub const PITCH_LIMIT: f32 = 0.12;

pub const COORDS_PER_VERTEX: usize = 3;

// Light is kept just above the user
pub const LIGHT_POS_IN_WORLD_SPACE: Vec4 = Vec4::new(0.0, 2.0, 0.0, 1.0);

// Heart placement
pub const MODEL_DISTANCE: f32 = 2.0; // initial distance straight ahead
pub const MIN_MODEL_DISTANCE: f32 = 3.0; // relocation range (hunt mode)
pub const MAX_MODEL_DISTANCE: f32 = 7.0;
pub const RELOCATE_MIN_YAW_DEG: f32 = 90.0;
pub const RELOCATE_YAW_SPAN_DEG: f32 = 180.0;
pub const RELOCATE_MAX_ELEVATION_DEG: f32 = 40.0;

// Floor appears this far below the user
pub const FLOOR_DEPTH: f32 = 20.0;

// Pulse animation
pub const PULSE_PERIOD_FRAMES: u32 = 60;
pub const PULSE_HALF_PERIOD: f32 = 30.0;
pub const PULSE_SCALE_DIVISOR: f32 = 6.0; // max relative growth = 2 / divisor

// Audio
pub const SOUND_FILE: &str = "cube_sound.wav";

// Trigger feedback
pub const TRIGGER_VIBRATE_MS: u64 = 50;

// Stereo rig (desktop host)
pub const INTERPUPILLARY_DISTANCE: f32 = 0.064;
pub const EYE_FOV_Y_DEGREES: f32 = 90.0;

// Dark background so overlay text shows up well
pub const CLEAR_COLOR: [f64; 4] = [0.1, 0.1, 0.1, 0.5];

// Palette
pub const DARK_RED_COLOR: [f32; 4] = [0.545, 0.0, 0.0, 1.0];
pub const CARDINAL_RED_COLOR: [f32; 4] = [0.769, 0.118, 0.227, 1.0];
pub const FLOOR_COLOR: [f32; 4] = [0.0, 0.3398, 0.9023, 1.0];

// Toasts
pub const START_TOAST: &str = "Pull the magnet when you find an object.";
pub const MISS_TOAST: &str = "Look around to find the object!";

#[inline]
pub fn initial_model_position() -> Vec3 {
    Vec3::new(0.0, 0.0, -MODEL_DISTANCE)
}
