// Host-side tests for the stereo scene callbacks, driven with recording
// audio and haptics stand-ins.

use glam::{Quat, Vec3};
use pulse_core::haptics::Haptics;
use pulse_core::{
    pulse_scale, AudioError, Eye, EyeSide, FramePhase, HeadTransform, PulseScene, SceneConfig,
    SoundId, SpatialAudio, StereoParams, TriggerOutcome, Viewport, MISS_TOAST,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum AudioCall {
    Preload(String),
    Create(String),
    Position(u32, Vec3),
    Listener(Quat),
    Play(u32, bool),
    Pause,
    Resume,
}

#[derive(Default)]
struct RecordingAudio {
    calls: Mutex<Vec<AudioCall>>,
    fail_preload: bool,
}

impl RecordingAudio {
    fn calls(&self) -> Vec<AudioCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: AudioCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SpatialAudio for RecordingAudio {
    fn preload(&self, file: &str) -> Result<(), AudioError> {
        self.record(AudioCall::Preload(file.to_string()));
        if self.fail_preload {
            return Err(AudioError::MissingAsset(file.to_string()));
        }
        Ok(())
    }
    fn create_object(&self, file: &str) -> Result<SoundId, AudioError> {
        self.record(AudioCall::Create(file.to_string()));
        Ok(SoundId(7))
    }
    fn set_position(&self, id: SoundId, position: Vec3) -> Result<(), AudioError> {
        self.record(AudioCall::Position(id.0, position));
        Ok(())
    }
    fn set_listener_orientation(&self, orientation: Quat) {
        self.record(AudioCall::Listener(orientation));
    }
    fn play(&self, id: SoundId, looped: bool) -> Result<(), AudioError> {
        self.record(AudioCall::Play(id.0, looped));
        Ok(())
    }
    fn pause(&self) {
        self.record(AudioCall::Pause);
    }
    fn resume(&self) {
        self.record(AudioCall::Resume);
    }
}

#[derive(Clone, Default)]
struct CountingHaptics(Arc<Mutex<Vec<Duration>>>);

impl Haptics for CountingHaptics {
    fn vibrate(&mut self, duration: Duration) {
        self.0.lock().unwrap().push(duration);
    }
}

fn scene_with(
    config: SceneConfig,
    audio: Option<Arc<dyn SpatialAudio>>,
) -> (PulseScene, CountingHaptics) {
    let haptics = CountingHaptics::default();
    let scene = PulseScene::with_rng(
        config,
        audio,
        Box::new(haptics.clone()),
        StdRng::seed_from_u64(11),
    );
    (scene, haptics)
}

fn run_frame(scene: &mut PulseScene, head: &HeadTransform) -> [pulse_core::EyeFrame; 2] {
    let stereo = StereoParams::default();
    scene.on_new_frame(head).unwrap();
    let eye = |side| Eye::from_head(side, head, &stereo, Viewport::half(side, 1280, 640));
    let left = scene.on_draw_eye(&eye(EyeSide::Left)).unwrap();
    let right = scene.on_draw_eye(&eye(EyeSide::Right)).unwrap();
    scene
        .on_finish_frame(&Viewport {
            x: 0,
            y: 0,
            width: 1280,
            height: 640,
        })
        .unwrap();
    [left, right]
}

#[test]
fn initial_state() {
    let (scene, _) = scene_with(SceneConfig::default(), None);
    assert_eq!(scene.model_position(), Vec3::new(0.0, 0.0, -2.0));
    assert_eq!(scene.model_floor().w_axis.truncate(), Vec3::new(0.0, -20.0, 0.0));
    assert_eq!(scene.pulse().signal_frame(), 0);
    assert_eq!(scene.phase(), FramePhase::AwaitingPose);
    assert!(scene.is_looking_at_object());
}

#[test]
fn sound_loader_publishes_and_plays_looped() {
    let audio = Arc::new(RecordingAudio::default());
    let (mut scene, _) = scene_with(SceneConfig::default(), Some(audio.clone()));
    let loader = scene.on_surface_created().unwrap().expect("loader thread");
    loader.join().unwrap();

    assert_eq!(scene.sound_slot().get(), Some(SoundId(7)));
    let calls = audio.calls();
    assert!(calls.contains(&AudioCall::Preload("cube_sound.wav".into())));
    assert!(calls.contains(&AudioCall::Position(7, Vec3::new(0.0, 0.0, -2.0))));
    assert!(calls.contains(&AudioCall::Play(7, true)));
}

#[test]
fn failed_load_leaves_slot_empty() {
    let audio = Arc::new(RecordingAudio {
        fail_preload: true,
        ..Default::default()
    });
    let (mut scene, _) = scene_with(SceneConfig::default(), Some(audio.clone()));
    scene.on_surface_created().unwrap().unwrap().join().unwrap();
    assert!(!scene.sound_slot().is_ready());

    // Moving the heart without a sound must not touch the engine.
    let before = audio.calls().len();
    scene.update_model_position(Vec3::new(1.0, 0.0, -3.0));
    assert_eq!(audio.calls().len(), before);
}

#[test]
fn each_frame_steers_listener() {
    let audio = Arc::new(RecordingAudio::default());
    let (mut scene, _) = scene_with(SceneConfig::default(), Some(audio.clone()));
    let head = HeadTransform::from_yaw_pitch(0.3, 0.0);
    run_frame(&mut scene, &head);
    assert!(audio.calls().contains(&AudioCall::Listener(head.orientation)));
}

#[test]
fn pulse_advances_once_per_eye() {
    let (mut scene, _) = scene_with(SceneConfig::default(), None);
    let frames = run_frame(&mut scene, &HeadTransform::default());
    assert_eq!(scene.pulse().signal_frame(), 2);
    assert_eq!(frames[0].side, EyeSide::Left);
    assert_eq!(frames[1].side, EyeSide::Right);
    assert_ne!(frames[0].heart.color, frames[1].heart.color);
    assert!(frames[0].floor.color.is_none());
    assert_eq!(scene.frames_completed(), 1);
}

#[test]
fn heart_scale_tracks_phase() {
    let (mut scene, _) = scene_with(SceneConfig::default(), None);
    for _ in 0..10 {
        run_frame(&mut scene, &HeadTransform::default());
    }
    let (scale, _, _) = scene.model_object().to_scale_rotation_translation();
    assert!((scale.x - scene.pulse().prev_scale()).abs() < 1e-4);
    assert!((scene.pulse().prev_scale() - pulse_scale(18)).abs() < 1e-6);
}

#[test]
fn eyes_are_offset_and_split_viewport() {
    let (mut scene, _) = scene_with(SceneConfig::default(), None);
    let [left, right] = run_frame(&mut scene, &HeadTransform::default());
    assert_eq!(left.viewport.x, 0);
    assert_eq!(right.viewport.x, 640);
    let dx = left.heart.model_view.w_axis.x - right.heart.model_view.w_axis.x;
    assert!((dx - 0.064).abs() < 1e-4);
}

#[test]
fn draw_without_pose_is_an_error() {
    let (mut scene, _) = scene_with(SceneConfig::default(), None);
    let head = HeadTransform::default();
    let eye = Eye::from_head(
        EyeSide::Left,
        &head,
        &StereoParams::default(),
        Viewport::half(EyeSide::Left, 100, 100),
    );
    assert!(scene.on_draw_eye(&eye).is_err());
}

#[test]
fn trigger_outside_hunt_mode_only_vibrates() {
    let (mut scene, haptics) = scene_with(SceneConfig::default(), None);
    assert_eq!(scene.on_trigger(), TriggerOutcome::Feedback);
    assert_eq!(scene.score(), 0);
    assert_eq!(*haptics.0.lock().unwrap(), vec![Duration::from_millis(50)]);
}

#[test]
fn hunt_mode_scores_and_relocates() {
    let config = SceneConfig {
        hunt_mode: true,
        ..SceneConfig::default()
    };
    let (mut scene, haptics) = scene_with(config, None);
    run_frame(&mut scene, &HeadTransform::default());

    match scene.on_trigger() {
        TriggerOutcome::Found { score, toast } => {
            assert_eq!(score, 1);
            assert_eq!(toast, "Found it! Look around for another one.\nScore = 1");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_ne!(scene.model_position(), Vec3::new(0.0, 0.0, -2.0));
    assert_eq!(scene.pulse().prev_scale(), 1.0);
    assert!(!scene.is_looking_at_object());

    assert_eq!(
        scene.on_trigger(),
        TriggerOutcome::Missed {
            toast: MISS_TOAST.to_string()
        }
    );
    assert_eq!(scene.score(), 1);
    assert_eq!(haptics.0.lock().unwrap().len(), 2);
}

#[test]
fn pause_and_resume_reach_the_engine() {
    let audio = Arc::new(RecordingAudio::default());
    let (scene, _) = scene_with(SceneConfig::default(), Some(audio.clone()));
    scene.on_pause();
    scene.on_resume();
    assert_eq!(audio.calls(), vec![AudioCall::Pause, AudioCall::Resume]);
}

#[test]
fn sound_follows_moves_but_not_pulses() {
    let audio = Arc::new(RecordingAudio::default());
    let config = SceneConfig {
        hunt_mode: true,
        ..SceneConfig::default()
    };
    let (mut scene, _) = scene_with(config, Some(audio.clone()));
    scene.on_surface_created().unwrap().unwrap().join().unwrap();

    let positions = |calls: &[AudioCall]| {
        calls
            .iter()
            .filter(|c| matches!(c, AudioCall::Position(..)))
            .count()
    };
    let after_load = positions(&audio.calls());
    assert!(after_load >= 1);

    for _ in 0..30 {
        run_frame(&mut scene, &HeadTransform::default());
    }
    assert_eq!(positions(&audio.calls()), after_load);

    assert!(matches!(scene.on_trigger(), TriggerOutcome::Found { score: 1, .. }));
    assert_eq!(
        audio.calls().last(),
        Some(&AudioCall::Position(7, scene.model_position()))
    );
}
