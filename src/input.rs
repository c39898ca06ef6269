use pulse_core::HeadTransform;
use std::f32::consts::FRAC_PI_2;
use winit::keyboard::KeyCode;

// Radians of head turn per pixel of mouse travel
const LOOK_SENSITIVITY: f32 = 0.0025;
// Radians per arrow key press
const KEY_LOOK_STEP: f32 = 0.05;
// Stop just short of straight up/down
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Trigger,
    Recenter,
    Look { yaw_steps: i8, pitch_steps: i8 },
    Quit,
}

#[inline]
pub fn action_for_key(key: KeyCode) -> Option<InputAction> {
    match key {
        KeyCode::Space | KeyCode::Enter => Some(InputAction::Trigger),
        KeyCode::KeyR => Some(InputAction::Recenter),
        KeyCode::ArrowLeft => Some(InputAction::Look {
            yaw_steps: 1,
            pitch_steps: 0,
        }),
        KeyCode::ArrowRight => Some(InputAction::Look {
            yaw_steps: -1,
            pitch_steps: 0,
        }),
        KeyCode::ArrowUp => Some(InputAction::Look {
            yaw_steps: 0,
            pitch_steps: 1,
        }),
        KeyCode::ArrowDown => Some(InputAction::Look {
            yaw_steps: 0,
            pitch_steps: -1,
        }),
        KeyCode::Escape => Some(InputAction::Quit),
        _ => None,
    }
}

/// Mouse-look stand-in for a head tracker. Dragging with the left button
/// turns the head; yaw is unbounded, pitch is clamped.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeadTracker {
    pub(crate) yaw: f32,
    pub(crate) pitch: f32,
    pub dragging: bool,
}

impl HeadTracker {
    pub fn on_mouse_motion(&mut self, dx: f64, dy: f64) {
        if !self.dragging {
            return;
        }
        self.turn(-dx as f32 * LOOK_SENSITIVITY, -dy as f32 * LOOK_SENSITIVITY);
    }

    pub fn step(&mut self, yaw_steps: i8, pitch_steps: i8) {
        self.turn(
            yaw_steps as f32 * KEY_LOOK_STEP,
            pitch_steps as f32 * KEY_LOOK_STEP,
        );
    }

    pub fn recenter(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }

    fn turn(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn head_transform(&self) -> HeadTransform {
        HeadTransform::from_yaw_pitch(self.yaw, self.pitch)
    }
}
