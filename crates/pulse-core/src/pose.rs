//! Per-frame transform update for the heart.

use crate::pulse::PulseState;
use glam::{Mat4, Quat, Vec3};

/// World transform of the pulsing object together with the position it was
/// last placed at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectPose {
    model: Mat4,
    position: Vec3,
}

impl ObjectPose {
    pub fn at(position: Vec3) -> Self {
        Self {
            model: Mat4::from_translation(position),
            position,
        }
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Reset the transform to a pure translation. Spin and pulse scale are
    /// dropped; the pulse state must be reset alongside so the next relative
    /// scale starts from 1.
    pub fn place(&mut self, position: Vec3) {
        self.position = position;
        self.model = Mat4::from_translation(position);
    }

    /// Spin about the local +Y axis by `degrees`.
    pub fn spin(&mut self, degrees: f32) {
        self.model *= Mat4::from_quat(Quat::from_rotation_y(degrees.to_radians()));
    }

    /// Uniform scale relative to whatever scale the transform already holds.
    pub fn rescale(&mut self, ratio: f32) {
        self.model *= Mat4::from_scale(Vec3::splat(ratio));
    }

    /// One frame of animation: spin, then re-scale to the current pulse phase.
    pub fn advance_frame(&mut self, rotation_step_deg: f32, pulse: &mut PulseState) {
        self.spin(rotation_step_deg);
        let ratio = pulse.next_scale_ratio();
        self.rescale(ratio);
        log::trace!(
            "heart pose: phase {} scale {:.4}",
            pulse.signal_frame(),
            pulse.prev_scale()
        );
    }
}
