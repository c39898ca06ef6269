//! Hunt-mode relocation: move the heart somewhere behind the viewer.

use crate::constants::*;
use glam::{Mat4, Vec3};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Relocation {
    pub position: Vec3,
    pub distance: f32,
}

/// Pick a new heart position.
///
/// The current translation of `model` is swung 90–270 degrees about +Y and
/// stretched to a random distance in `[MIN_MODEL_DISTANCE, MAX_MODEL_DISTANCE)`;
/// the height is then set from a random elevation angle within ±40 degrees.
pub fn relocate<R: Rng + ?Sized>(rng: &mut R, model: Mat4, current_distance: f32) -> Relocation {
    let angle_xz = rng.gen::<f32>() * RELOCATE_YAW_SPAN_DEG + RELOCATE_MIN_YAW_DEG;
    let distance =
        rng.gen::<f32>() * (MAX_MODEL_DISTANCE - MIN_MODEL_DISTANCE) + MIN_MODEL_DISTANCE;
    let stretch = if current_distance > f32::EPSILON {
        distance / current_distance
    } else {
        1.0
    };
    let swing =
        Mat4::from_rotation_y(angle_xz.to_radians()) * Mat4::from_scale(Vec3::splat(stretch));
    let swung = swing.transform_point3(model.w_axis.truncate());

    let elevation = (rng.gen::<f32>() * 2.0 - 1.0) * RELOCATE_MAX_ELEVATION_DEG;
    let y = elevation.to_radians().tan() * distance;

    Relocation {
        position: Vec3::new(swung.x, y, swung.z),
        distance,
    }
}
