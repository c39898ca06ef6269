pub mod audio;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod gaze;
pub mod geometry;
pub mod haptics;
pub mod head;
pub mod lifecycle;
pub mod pose;
pub mod pulse;
pub mod relocate;
pub mod scene;
pub mod uart;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use audio::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use gaze::*;
pub use head::*;
pub use lifecycle::*;
pub use pose::*;
pub use pulse::*;
pub use scene::*;
