//! Inputs supplied by the head-mounted display host each frame.

use crate::config::StereoParams;
use glam::{Mat4, Quat, Vec3};

/// Head orientation for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadTransform {
    /// World to head space.
    pub head_view: Mat4,
    pub orientation: Quat,
}

impl Default for HeadTransform {
    fn default() -> Self {
        Self::from_orientation(Quat::IDENTITY)
    }
}

impl HeadTransform {
    /// Head view for a head rotated by `orientation` at the origin.
    pub fn from_orientation(orientation: Quat) -> Self {
        Self {
            head_view: Mat4::from_quat(orientation.inverse()),
            orientation,
        }
    }

    /// Orientation from yaw (about +Y) then pitch (about +X), radians.
    pub fn from_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        Self::from_orientation(Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch))
    }

    /// Unit vector the head is facing.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EyeSide {
    Left,
    Right,
}

impl EyeSide {
    pub fn index(self) -> usize {
        match self {
            EyeSide::Left => 0,
            EyeSide::Right => 1,
        }
    }
}

/// Pixel rectangle an eye is drawn into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Left or right half of a `width` x `height` surface.
    pub fn half(side: EyeSide, width: u32, height: u32) -> Self {
        let half = width / 2;
        Self {
            x: if side == EyeSide::Left { 0 } else { half },
            y: 0,
            width: half.max(1),
            height: height.max(1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eye {
    pub side: EyeSide,
    /// Head pose with this eye's offset applied; world to eye space.
    pub eye_view: Mat4,
    pub viewport: Viewport,
    pub fov_y_radians: f32,
}

impl Eye {
    /// Build an eye from the head pose, offset sideways by half the IPD.
    pub fn from_head(
        side: EyeSide,
        head: &HeadTransform,
        stereo: &StereoParams,
        viewport: Viewport,
    ) -> Self {
        let half_ipd = stereo.ipd * 0.5;
        // The scene moves opposite to the eye.
        let shift = match side {
            EyeSide::Left => half_ipd,
            EyeSide::Right => -half_ipd,
        };
        Self {
            side,
            eye_view: Mat4::from_translation(Vec3::new(shift, 0.0, 0.0)) * head.head_view,
            viewport,
            fov_y_radians: stereo.fov_y_radians,
        }
    }

    pub fn perspective(&self, z_near: f32, z_far: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_radians, self.viewport.aspect(), z_near, z_far)
    }
}
