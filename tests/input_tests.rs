// Host-side tests for the mouse-look head tracker and key mapping.
// The front-end is a binary crate, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;
use winit::keyboard::KeyCode;

#[test]
fn keys_map_to_actions() {
    assert_eq!(action_for_key(KeyCode::Space), Some(InputAction::Trigger));
    assert_eq!(action_for_key(KeyCode::Enter), Some(InputAction::Trigger));
    assert_eq!(action_for_key(KeyCode::KeyR), Some(InputAction::Recenter));
    assert_eq!(action_for_key(KeyCode::Escape), Some(InputAction::Quit));
    assert_eq!(action_for_key(KeyCode::KeyQ), None);
}

#[test]
fn motion_ignored_unless_dragging() {
    let mut tracker = HeadTracker::default();
    tracker.on_mouse_motion(500.0, 200.0);
    assert!(tracker
        .head_transform()
        .forward()
        .abs_diff_eq(Vec3::NEG_Z, 1e-6));
}

#[test]
fn dragging_right_turns_head_right() {
    let mut tracker = HeadTracker {
        dragging: true,
        ..Default::default()
    };
    tracker.on_mouse_motion(200.0, 0.0);
    let forward = tracker.head_transform().forward();
    assert!(forward.x > 0.0);
    assert!(forward.y.abs() < 1e-6);
}

#[test]
fn pitch_is_clamped() {
    let mut tracker = HeadTracker::default();
    for _ in 0..200 {
        tracker.step(0, 1);
    }
    let forward = tracker.head_transform().forward();
    assert!(forward.y < 1.0);
    assert!(forward.y > 0.99);
}

#[test]
fn recenter_faces_forward() {
    let mut tracker = HeadTracker::default();
    tracker.step(5, -3);
    tracker.recenter();
    assert!(tracker
        .head_transform()
        .forward()
        .abs_diff_eq(Vec3::NEG_Z, 1e-6));
}
