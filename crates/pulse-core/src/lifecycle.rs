//! Ordering of the stereo frame callbacks.
//!
//! A host drives each displayed frame as: pose ready, draw left eye, draw
//! right eye, frame finished. [`FrameLifecycle`] tracks where in that sequence
//! we are and rejects calls that arrive out of order.

use crate::error::LifecycleError;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramePhase {
    AwaitingPose,
    DrawingEye(u8),
    Finished,
}

impl fmt::Display for FramePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramePhase::AwaitingPose => write!(f, "awaiting pose"),
            FramePhase::DrawingEye(i) => write!(f, "drawing eye {i}"),
            FramePhase::Finished => write!(f, "finished"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameCall {
    NewFrame,
    DrawEye,
    FinishFrame,
}

impl fmt::Display for FrameCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrameCall::NewFrame => "new_frame",
            FrameCall::DrawEye => "draw_eye",
            FrameCall::FinishFrame => "finish_frame",
        };
        f.write_str(name)
    }
}

pub const EYE_COUNT: u8 = 2;

#[derive(Clone, Debug)]
pub struct FrameLifecycle {
    phase: FramePhase,
    frames_completed: u64,
}

impl Default for FrameLifecycle {
    fn default() -> Self {
        Self {
            phase: FramePhase::AwaitingPose,
            frames_completed: 0,
        }
    }
}

impl FrameLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FramePhase {
        self.phase
    }

    pub fn frames_completed(&self) -> u64 {
        self.frames_completed
    }

    /// Pose for a new frame is available. Allowed before the first frame and
    /// after the previous frame finished.
    pub fn begin_frame(&mut self) -> Result<(), LifecycleError> {
        match self.phase {
            FramePhase::AwaitingPose => {
                self.phase = FramePhase::DrawingEye(0);
                Ok(())
            }
            phase => Err(LifecycleError::OutOfOrder {
                phase,
                call: FrameCall::NewFrame,
            }),
        }
    }

    /// Claim the next eye to draw, returning its index.
    pub fn draw_eye(&mut self) -> Result<u8, LifecycleError> {
        match self.phase {
            FramePhase::DrawingEye(i) => {
                self.phase = if i + 1 < EYE_COUNT {
                    FramePhase::DrawingEye(i + 1)
                } else {
                    FramePhase::Finished
                };
                Ok(i)
            }
            phase => Err(LifecycleError::OutOfOrder {
                phase,
                call: FrameCall::DrawEye,
            }),
        }
    }

    /// Both eyes drawn; return to waiting for the next pose.
    pub fn finish_frame(&mut self) -> Result<(), LifecycleError> {
        match self.phase {
            FramePhase::Finished => {
                self.phase = FramePhase::AwaitingPose;
                self.frames_completed += 1;
                Ok(())
            }
            phase => Err(LifecycleError::OutOfOrder {
                phase,
                call: FrameCall::FinishFrame,
            }),
        }
    }
}
