//! Heartbeat animation phase.
//!
//! The phase `t` (`signal_frame`) runs over `[0, 60)` and drives both the
//! scale of the heart and its colour. Both curves share the raised cosine
//! `(cos(π + t/30·π) + 1) / 2`, which is 0 at `t = 0` and 1 at `t = 30`.

use crate::constants::{PULSE_HALF_PERIOD, PULSE_PERIOD_FRAMES, PULSE_SCALE_DIVISOR};
use std::f64::consts::PI;

/// Raised cosine in `[0, 2]` shared by scale and colour curves.
#[inline]
fn raised_cosine(t: u32) -> f64 {
    (PI + t as f64 / PULSE_HALF_PERIOD as f64 * PI).cos() + 1.0
}

/// Heart scale at phase `t`, in `[1.0, 1.3333]`.
#[inline]
pub fn pulse_scale(t: u32) -> f32 {
    1.0 + (raised_cosine(t) / PULSE_SCALE_DIVISOR as f64) as f32
}

/// Colour blend proportion at phase `t`, in `[0, 1]`.
#[inline]
pub fn pulse_proportion(t: u32) -> f32 {
    (raised_cosine(t) / 2.0) as f32
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseState {
    signal_frame: u32,
    prev_scale: f32,
}

impl Default for PulseState {
    fn default() -> Self {
        Self {
            signal_frame: 0,
            prev_scale: 1.0,
        }
    }
}

impl PulseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal_frame(&self) -> u32 {
        self.signal_frame
    }

    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }

    /// Step the phase by one draw call, wrapping at the period, and return the
    /// new phase.
    pub fn advance(&mut self) -> u32 {
        self.signal_frame = (self.signal_frame + 1) % PULSE_PERIOD_FRAMES;
        self.signal_frame
    }

    /// Forget the scale baked into the transform, e.g. after it was rebuilt
    /// from a bare translation.
    pub fn reset_scale(&mut self) {
        self.prev_scale = 1.0;
    }

    /// Scale for the current phase and the ratio to apply on top of a
    /// transform that already carries the previous scale. Records the new
    /// scale as previous.
    pub fn next_scale_ratio(&mut self) -> f32 {
        let scale = pulse_scale(self.signal_frame);
        let ratio = scale / self.prev_scale;
        self.prev_scale = scale;
        ratio
    }
}
