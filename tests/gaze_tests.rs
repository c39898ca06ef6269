// Host-side tests for gaze detection.

use glam::{Mat4, Vec3};
use pulse_core::{gaze_angles, is_looking_at_object, HeadTransform, PITCH_LIMIT, YAW_LIMIT};

fn looking(head: &HeadTransform, position: Vec3) -> bool {
    is_looking_at_object(
        head.head_view,
        Mat4::from_translation(position),
        PITCH_LIMIT,
        YAW_LIMIT,
    )
}

#[test]
fn object_straight_ahead_is_seen() {
    let head = HeadTransform::default();
    for d in [0.5, 2.0, 50.0] {
        assert!(looking(&head, Vec3::new(0.0, 0.0, -d)));
    }
}

#[test]
fn object_behind_is_not_seen() {
    assert!(!looking(&HeadTransform::default(), Vec3::new(0.0, 0.0, 2.0)));
}

#[test]
fn yaw_limit_is_exclusive() {
    let head = HeadTransform::default();
    let inside = Vec3::new((YAW_LIMIT - 0.01).tan() * 2.0, 0.0, -2.0);
    let outside = Vec3::new((YAW_LIMIT + 0.01).tan() * 2.0, 0.0, -2.0);
    assert!(looking(&head, inside));
    assert!(!looking(&head, outside));
}

#[test]
fn pitch_limit_is_exclusive() {
    let head = HeadTransform::default();
    let inside = Vec3::new(0.0, (PITCH_LIMIT - 0.01).tan() * 2.0, -2.0);
    let outside = Vec3::new(0.0, -(PITCH_LIMIT + 0.01).tan() * 2.0, -2.0);
    assert!(looking(&head, inside));
    assert!(!looking(&head, outside));
}

#[test]
fn turning_the_head_follows_the_object() {
    let position = Vec3::new(-2.0, 0.0, 0.0);
    assert!(!looking(&HeadTransform::default(), position));
    let turned = HeadTransform::from_yaw_pitch(std::f32::consts::FRAC_PI_2, 0.0);
    assert!(looking(&turned, position));
}

#[test]
fn angles_have_expected_signs() {
    let head = HeadTransform::default();
    let model = Mat4::from_translation(Vec3::new(1.0, 1.0, -4.0));
    let (pitch, yaw) = gaze_angles(head.head_view, model);
    assert!(pitch > 0.0);
    assert!(yaw > 0.0);
}
