// Host-side tests for hunt-mode relocation.

use glam::{Mat4, Vec3};
use pulse_core::relocate::relocate;
use pulse_core::{MAX_MODEL_DISTANCE, MIN_MODEL_DISTANCE, RELOCATE_MAX_ELEVATION_DEG};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn new_position_respects_distance_and_elevation() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut model = Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0));
    let mut distance = 2.0;
    for _ in 0..200 {
        let moved = relocate(&mut rng, model, distance);
        assert!(moved.distance >= MIN_MODEL_DISTANCE && moved.distance < MAX_MODEL_DISTANCE);

        let horizontal = Vec3::new(moved.position.x, 0.0, moved.position.z).length();
        assert!((horizontal - moved.distance).abs() < 1e-3);

        let elevation = moved.position.y.atan2(horizontal).to_degrees();
        assert!(elevation.abs() <= RELOCATE_MAX_ELEVATION_DEG + 1e-3);

        model = Mat4::from_translation(moved.position);
        distance = moved.distance;
    }
}

#[test]
fn object_swings_away_from_view() {
    let mut rng = StdRng::seed_from_u64(99);
    let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0));
    for _ in 0..50 {
        let moved = relocate(&mut rng, model, 2.0);
        let before = Vec3::new(0.0, 0.0, -1.0);
        let after = Vec3::new(moved.position.x, 0.0, moved.position.z).normalize();
        // 90..270 degrees of swing never leaves it in front of the viewer.
        assert!(before.dot(after) <= 1e-4);
    }
}

#[test]
fn same_seed_same_result() {
    let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0));
    let a = relocate(&mut StdRng::seed_from_u64(3), model, 2.0);
    let b = relocate(&mut StdRng::seed_from_u64(3), model, 2.0);
    assert_eq!(a, b);
}
