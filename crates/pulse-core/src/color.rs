use crate::constants::{CARDINAL_RED_COLOR, DARK_RED_COLOR};
use crate::pulse::pulse_proportion;

pub type Rgba = [f32; 4];

/// Linear interpolation between two RGBA colours; `p = 0` yields `from`,
/// `p = 1` yields `to`.
#[inline]
pub fn blend(from: Rgba, to: Rgba, p: f32) -> Rgba {
    let q = 1.0 - p;
    [
        from[0] * q + to[0] * p,
        from[1] * q + to[1] * p,
        from[2] * q + to[2] * p,
        from[3] * q + to[3] * p,
    ]
}

/// Heart colour at pulse phase `t`: dark red at rest, cardinal at peak.
#[inline]
pub fn heart_color(t: u32) -> Rgba {
    blend(DARK_RED_COLOR, CARDINAL_RED_COLOR, pulse_proportion(t))
}
