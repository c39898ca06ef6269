//! The stereo scene: a spinning, pulsing heart above a grid floor.
//!
//! [`PulseScene`] owns all per-frame state and exposes the callbacks a
//! head-mounted display host invokes, in order, once per displayed frame:
//! [`PulseScene::on_new_frame`], [`PulseScene::on_draw_eye`] for each eye,
//! then [`PulseScene::on_finish_frame`]. The renderer consumes the returned
//! [`EyeFrame`]s; everything here is plain math and stays host-testable.

use crate::audio::{spawn_sound_loader, SoundSlot, SpatialAudio};
use crate::color::{heart_color, Rgba};
use crate::config::SceneConfig;
use crate::constants::{CAMERA_Z, LIGHT_POS_IN_WORLD_SPACE, MISS_TOAST};
use crate::error::LifecycleError;
use crate::gaze::is_looking_at_object;
use crate::haptics::Haptics;
use crate::head::{Eye, EyeSide, HeadTransform, Viewport};
use crate::lifecycle::{FrameLifecycle, FramePhase};
use crate::pose::ObjectPose;
use crate::pulse::PulseState;
use crate::relocate::relocate;
use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Matrices (and optional flat colour) for one drawable in one eye.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub model: Mat4,
    pub model_view: Mat4,
    pub model_view_projection: Mat4,
    pub color: Option<Rgba>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyeFrame {
    pub side: EyeSide,
    pub viewport: Viewport,
    pub light_pos_eye: Vec3,
    pub heart: DrawCall,
    pub floor: DrawCall,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Haptic feedback only.
    Feedback,
    Found { score: u32, toast: String },
    Missed { toast: String },
}

pub struct PulseScene {
    config: SceneConfig,
    pose: ObjectPose,
    pulse: PulseState,
    model_floor: Mat4,
    camera: Mat4,
    head: HeadTransform,
    lifecycle: FrameLifecycle,
    audio: Option<Arc<dyn SpatialAudio>>,
    sound: Arc<SoundSlot>,
    haptics: Box<dyn Haptics>,
    score: u32,
    object_distance: f32,
    rng: StdRng,
}

impl PulseScene {
    pub fn new(
        config: SceneConfig,
        audio: Option<Arc<dyn SpatialAudio>>,
        haptics: Box<dyn Haptics>,
    ) -> Self {
        Self::with_rng(config, audio, haptics, StdRng::from_entropy())
    }

    /// Deterministic relocation for tests and replays.
    pub fn with_rng(
        config: SceneConfig,
        audio: Option<Arc<dyn SpatialAudio>>,
        haptics: Box<dyn Haptics>,
        rng: StdRng,
    ) -> Self {
        let pose = ObjectPose::at(config.initial_position);
        let object_distance = config.initial_distance();
        Self {
            pose,
            pulse: PulseState::new(),
            model_floor: Mat4::from_translation(Vec3::new(0.0, -config.floor_depth, 0.0)),
            camera: Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y),
            head: HeadTransform::default(),
            lifecycle: FrameLifecycle::new(),
            audio,
            sound: Arc::new(SoundSlot::new()),
            haptics,
            score: 0,
            object_distance,
            rng,
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn model_object(&self) -> Mat4 {
        self.pose.model()
    }

    pub fn model_floor(&self) -> Mat4 {
        self.model_floor
    }

    pub fn model_position(&self) -> Vec3 {
        self.pose.position()
    }

    pub fn camera(&self) -> Mat4 {
        self.camera
    }

    pub fn head(&self) -> &HeadTransform {
        &self.head
    }

    pub fn pulse(&self) -> &PulseState {
        &self.pulse
    }

    pub fn phase(&self) -> FramePhase {
        self.lifecycle.phase()
    }

    pub fn frames_completed(&self) -> u64 {
        self.lifecycle.frames_completed()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn sound_slot(&self) -> Arc<SoundSlot> {
        Arc::clone(&self.sound)
    }

    /// Surface is ready: place the floor and the heart and start loading the
    /// heart's sound without blocking the first frames.
    pub fn on_surface_created(&mut self) -> std::io::Result<Option<JoinHandle<()>>> {
        log::info!("surface created");
        self.model_floor = Mat4::from_translation(Vec3::new(0.0, -self.config.floor_depth, 0.0));
        let loader = match &self.audio {
            Some(audio) => Some(spawn_sound_loader(
                Arc::clone(audio),
                Arc::clone(&self.sound),
                self.config.sound_file.clone(),
                self.pose.position(),
            )?),
            None => None,
        };
        self.update_model_position(self.pose.position());
        Ok(loader)
    }

    /// Move the heart and, once the sound exists, its audio source with it.
    pub fn update_model_position(&mut self, position: Vec3) {
        self.pose.place(position);
        self.pulse.reset_scale();
        if let (Some(audio), Some(id)) = (&self.audio, self.sound.get()) {
            if let Err(e) = audio.set_position(id, position) {
                log::warn!("sound reposition failed: {e}");
            }
        }
    }

    /// Pose for the next frame arrived: animate the heart and steer the
    /// audio listener.
    pub fn on_new_frame(&mut self, head: &HeadTransform) -> Result<(), LifecycleError> {
        self.lifecycle.begin_frame()?;
        self.pose
            .advance_frame(self.config.rotation_step_deg, &mut self.pulse);
        self.head = *head;
        if let Some(audio) = &self.audio {
            audio.set_listener_orientation(head.orientation);
        }
        Ok(())
    }

    /// Matrices and colours for one eye.
    pub fn on_draw_eye(&mut self, eye: &Eye) -> Result<EyeFrame, LifecycleError> {
        self.lifecycle.draw_eye()?;

        let view = eye.eye_view * self.camera;
        let light_pos_eye = (view * LIGHT_POS_IN_WORLD_SPACE).truncate();
        let perspective = eye.perspective(self.config.z_near, self.config.z_far);

        let heart_model = self.pose.model();
        let heart_mv = view * heart_model;
        let phase = self.pulse.advance();
        let heart = DrawCall {
            model: heart_model,
            model_view: heart_mv,
            model_view_projection: perspective * heart_mv,
            color: Some(heart_color(phase)),
        };

        let floor_mv = view * self.model_floor;
        let floor = DrawCall {
            model: self.model_floor,
            model_view: floor_mv,
            model_view_projection: perspective * floor_mv,
            color: None,
        };

        Ok(EyeFrame {
            side: eye.side,
            viewport: eye.viewport,
            light_pos_eye,
            heart,
            floor,
        })
    }

    pub fn on_finish_frame(&mut self, viewport: &Viewport) -> Result<(), LifecycleError> {
        self.lifecycle.finish_frame()?;
        log::trace!(
            "frame {} finished ({}x{})",
            self.lifecycle.frames_completed(),
            viewport.width,
            viewport.height
        );
        Ok(())
    }

    pub fn is_looking_at_object(&self) -> bool {
        is_looking_at_object(
            self.head.head_view,
            self.pose.model(),
            self.config.pitch_limit,
            self.config.yaw_limit,
        )
    }

    /// Trigger pulled. Always vibrates; in hunt mode also scores a gaze hit
    /// and hides the heart somewhere new.
    pub fn on_trigger(&mut self) -> TriggerOutcome {
        log::info!("trigger");
        let outcome = if !self.config.hunt_mode {
            TriggerOutcome::Feedback
        } else if self.is_looking_at_object() {
            self.score += 1;
            self.hide_object();
            TriggerOutcome::Found {
                score: self.score,
                toast: format!(
                    "Found it! Look around for another one.\nScore = {}",
                    self.score
                ),
            }
        } else {
            TriggerOutcome::Missed {
                toast: MISS_TOAST.to_string(),
            }
        };
        self.haptics.vibrate(self.config.trigger_vibration);
        outcome
    }

    fn hide_object(&mut self) {
        let moved = relocate(&mut self.rng, self.pose.model(), self.object_distance);
        self.object_distance = moved.distance;
        log::debug!(
            "heart relocated to {:?} at distance {:.2}",
            moved.position,
            moved.distance
        );
        self.update_model_position(moved.position);
    }

    pub fn on_pause(&self) {
        if let Some(audio) = &self.audio {
            audio.pause();
        }
    }

    pub fn on_resume(&self) {
        if let Some(audio) = &self.audio {
            audio.resume();
        }
    }
}
