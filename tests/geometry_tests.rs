// Host-side tests for mesh data and constants relationships.

use pulse_core::geometry::{
    floor_colors, floor_mesh, heart_mesh, FLOOR_VERTEX_COUNT, HEART_VERTEX_COUNT,
};
use pulse_core::*;

#[test]
fn heart_mesh_is_a_triangle_list() {
    let mesh = heart_mesh();
    assert_eq!(mesh.vertex_count(), HEART_VERTEX_COUNT);
    assert_eq!(mesh.normals.len(), mesh.positions.len());
    assert_eq!(mesh.vertex_count() % 3, 0);
}

#[test]
fn vertex_stride_matches_coords_per_vertex() {
    // The renderer derives position and normal strides from this constant.
    let heart = heart_mesh();
    assert_eq!(heart.positions[0].len(), COORDS_PER_VERTEX);
    assert_eq!(heart.normals[0].len(), COORDS_PER_VERTEX);
    assert_eq!(
        std::mem::size_of_val(&heart.positions[0]),
        std::mem::size_of::<f32>() * COORDS_PER_VERTEX
    );
}

#[test]
fn heart_fits_in_unit_box() {
    for p in heart_mesh().positions {
        assert!(p.iter().all(|c| c.abs() <= 1.0), "{p:?}");
    }
}

#[test]
fn normals_are_unit_length() {
    for n in heart_mesh().normals {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-4, "{n:?}");
    }
}

#[test]
fn floor_is_flat_and_coloured() {
    let mesh = floor_mesh();
    assert_eq!(mesh.vertex_count(), FLOOR_VERTEX_COUNT);
    assert!(mesh.positions.iter().all(|p| p[1] == 0.0));
    assert_eq!(floor_colors(), vec![FLOOR_COLOR; FLOOR_VERTEX_COUNT]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_consistent() {
    assert!(Z_NEAR < Z_FAR);
    assert!(CAMERA_Z > 0.0 && CAMERA_Z < Z_NEAR);
    assert!(MIN_MODEL_DISTANCE < MAX_MODEL_DISTANCE);
    assert!(MODEL_DISTANCE > Z_NEAR);
    assert_eq!(PULSE_HALF_PERIOD * 2.0, PULSE_PERIOD_FRAMES as f32);
    assert_eq!(initial_model_position().length(), MODEL_DISTANCE);
}
