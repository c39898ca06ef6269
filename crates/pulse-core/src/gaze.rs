use glam::{Mat4, Vec4};

/// Pitch and yaw (radians) of the object's origin as seen from the head.
///
/// The origin is pushed through `model` then `head_view`; angles are measured
/// from the forward (-Z) axis.
#[inline]
pub fn gaze_angles(head_view: Mat4, model: Mat4) -> (f32, f32) {
    let p = head_view * model * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let pitch = p.y.atan2(-p.z);
    let yaw = p.x.atan2(-p.z);
    (pitch, yaw)
}

/// True when the object's origin lies within the gaze cone.
#[inline]
pub fn is_looking_at_object(
    head_view: Mat4,
    model: Mat4,
    pitch_limit: f32,
    yaw_limit: f32,
) -> bool {
    let (pitch, yaw) = gaze_angles(head_view, model);
    pitch.abs() < pitch_limit && yaw.abs() < yaw_limit
}
