//! Vertex data for the two drawables.
//!
//! The heart is an extruded outline of the classic parametric heart curve;
//! the floor is one large quad. Both are emitted as flat triangle lists.

use crate::constants::FLOOR_COLOR;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

pub const HEART_SEGMENTS: usize = 20;
// front + back fan triangles and two side triangles per segment
pub const HEART_VERTEX_COUNT: usize = HEART_SEGMENTS * 12;
pub const FLOOR_VERTEX_COUNT: usize = 6;

const HEART_CURVE_EXTENT: f32 = 32.0; // width of the raw curve
const HEART_SIZE: f32 = 1.0; // width in world units
const HEART_HALF_DEPTH: f32 = 0.15;
const HEART_FAN_CENTER: Vec2 = Vec2::new(0.0, -2.0); // raw curve units, inside the outline
const FLOOR_HALF_EXTENT: f32 = 200.0;

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn push(&mut self, p: Vec3, n: Vec3) {
        self.positions.push(p.to_array());
        self.normals.push(n.to_array());
    }
}

/// Point on the heart curve, `t` in `[0, 2π)`, centred and scaled to world
/// units. Traversal is clockwise seen from +Z, starting at the top cusp.
fn heart_outline(t: f32) -> Vec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    (Vec2::new(x, y) - HEART_FAN_CENTER) * (HEART_SIZE / HEART_CURVE_EXTENT)
}

pub fn heart_mesh() -> Mesh {
    let mut mesh = Mesh::default();
    let outline: Vec<Vec2> = (0..HEART_SEGMENTS)
        .map(|i| heart_outline(i as f32 / HEART_SEGMENTS as f32 * TAU))
        .collect();
    let front = |p: Vec2| p.extend(HEART_HALF_DEPTH);
    let back = |p: Vec2| p.extend(-HEART_HALF_DEPTH);

    for i in 0..HEART_SEGMENTS {
        let a = outline[i];
        let b = outline[(i + 1) % HEART_SEGMENTS];

        mesh.push(front(Vec2::ZERO), Vec3::Z);
        mesh.push(front(b), Vec3::Z);
        mesh.push(front(a), Vec3::Z);

        mesh.push(back(Vec2::ZERO), Vec3::NEG_Z);
        mesh.push(back(a), Vec3::NEG_Z);
        mesh.push(back(b), Vec3::NEG_Z);

        let edge = b - a;
        let side = Vec3::new(-edge.y, edge.x, 0.0).normalize_or_zero();
        mesh.push(front(a), side);
        mesh.push(front(b), side);
        mesh.push(back(a), side);
        mesh.push(front(b), side);
        mesh.push(back(b), side);
        mesh.push(back(a), side);
    }
    mesh
}

pub fn floor_mesh() -> Mesh {
    let e = FLOOR_HALF_EXTENT;
    let corners = [
        Vec3::new(-e, 0.0, -e),
        Vec3::new(-e, 0.0, e),
        Vec3::new(e, 0.0, -e),
        Vec3::new(-e, 0.0, e),
        Vec3::new(e, 0.0, e),
        Vec3::new(e, 0.0, -e),
    ];
    let mut mesh = Mesh::default();
    for c in corners {
        mesh.push(c, Vec3::Y);
    }
    mesh
}

pub fn floor_colors() -> Vec<[f32; 4]> {
    vec![FLOOR_COLOR; FLOOR_VERTEX_COUNT]
}
