// Host-side tests for heart colour blending.

use pulse_core::{blend, heart_color, CARDINAL_RED_COLOR, DARK_RED_COLOR};

fn close(a: [f32; 4], b: [f32; 4]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
}

#[test]
fn blend_endpoints_are_exact() {
    assert_eq!(blend(DARK_RED_COLOR, CARDINAL_RED_COLOR, 0.0), DARK_RED_COLOR);
    assert_eq!(blend(DARK_RED_COLOR, CARDINAL_RED_COLOR, 1.0), CARDINAL_RED_COLOR);
}

#[test]
fn blend_is_symmetric() {
    for i in 0..=10 {
        let p = i as f32 / 10.0;
        assert!(close(
            blend(DARK_RED_COLOR, CARDINAL_RED_COLOR, p),
            blend(CARDINAL_RED_COLOR, DARK_RED_COLOR, 1.0 - p)
        ));
    }
}

#[test]
fn heart_is_dark_at_rest_and_cardinal_at_peak() {
    assert!(close(heart_color(0), DARK_RED_COLOR));
    assert!(close(heart_color(30), CARDINAL_RED_COLOR));
}

#[test]
fn heart_midpoint_is_halfway() {
    let mid = blend(DARK_RED_COLOR, CARDINAL_RED_COLOR, 0.5);
    assert!(close(heart_color(15), mid));
    assert!(close(heart_color(45), mid));
}
