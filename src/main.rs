use std::path::PathBuf;
use std::sync::Arc;
use winit::event::{DeviceEvent, ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::WindowBuilder;

use pulse_core::haptics::LoggedHaptics;
use pulse_core::uart::{CallbackId, UartLogger, UartSession};
use pulse_core::{
    LifecycleError, PulseScene, SceneConfig, SpatialAudio, StereoParams, TriggerOutcome,
    START_TOAST,
};

mod audio;
mod bluetooth;
mod frame;
mod input;
mod overlay;
mod render;

use bluetooth::DesktopUartLink;
use input::{HeadTracker, InputAction};
use render::{GpuState, RenderError};

const DEFAULT_ASSET_DIR: &str = "assets";

fn scene_config() -> SceneConfig {
    let hunt_mode = std::env::var("PULSE_HUNT").is_ok_and(|v| v == "1");
    SceneConfig {
        hunt_mode,
        ..SceneConfig::default()
    }
}

fn asset_dir() -> PathBuf {
    std::env::var_os("PULSE_ASSETS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR))
}

fn open_audio() -> Option<Arc<dyn SpatialAudio>> {
    let dir = asset_dir();
    match audio::KiraSpatialAudio::new(&dir) {
        Ok(audio) => {
            log::info!("spatial audio ready, assets in {}", dir.display());
            Some(Arc::new(audio))
        }
        Err(e) => {
            log::warn!("running without audio: {e}");
            None
        }
    }
}

/// UART callbacks live between start and stop, as the window gains and
/// loses focus.
struct UartControl {
    session: UartSession<DesktopUartLink>,
    logger: Option<CallbackId>,
}

impl UartControl {
    fn new() -> Self {
        Self {
            session: UartSession::new(DesktopUartLink),
            logger: None,
        }
    }

    fn start(&mut self) {
        if self.logger.is_some() {
            return;
        }
        self.logger = Some(self.session.register_callback(Box::new(UartLogger)));
        if let Err(e) = self.session.connect_first_available() {
            log::debug!(target: "bt", "connect failed: {e}");
        }
    }

    fn stop(&mut self) {
        if let Some(id) = self.logger.take() {
            self.session.unregister_callback(id);
        }
        self.session.disconnect();
    }

    fn pump(&mut self) {
        self.session.pump();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = scene_config();
    let hunt_mode = config.hunt_mode;
    let mut scene = PulseScene::new(config, open_audio(), Box::new(LoggedHaptics::default()));
    let stereo = StereoParams::default();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(overlay::base_title())
        .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 640.0))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    // The loader thread is detached; its result lands in the scene's sound slot.
    let _loader = scene.on_surface_created()?;

    let mut toast = overlay::Toast::new();
    if hunt_mode {
        toast.show(&window, START_TOAST);
    }
    let mut tracker = HeadTracker::default();
    let mut uart = UartControl::new();
    uart.start();

    let trigger = |scene: &mut PulseScene, toast: &mut overlay::Toast| {
        match scene.on_trigger() {
            TriggerOutcome::Feedback => {}
            TriggerOutcome::Found { toast: text, .. } | TriggerOutcome::Missed { toast: text } => {
                toast.show(&window, &text)
            }
        }
    };

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => {
                uart.stop();
                elwt.exit();
            }
            WindowEvent::Focused(true) => {
                scene.on_resume();
                uart.start();
            }
            WindowEvent::Focused(false) => {
                scene.on_pause();
                uart.stop();
            }
            WindowEvent::MouseInput { state: button_state, button, .. } => {
                let pressed = button_state == ElementState::Pressed;
                match button {
                    MouseButton::Left => tracker.dragging = pressed,
                    MouseButton::Right if pressed => trigger(&mut scene, &mut toast),
                    _ => {}
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match input::action_for_key(code) {
                Some(InputAction::Trigger) => trigger(&mut scene, &mut toast),
                Some(InputAction::Recenter) => tracker.recenter(),
                Some(InputAction::Look {
                    yaw_steps,
                    pitch_steps,
                }) => tracker.step(yaw_steps, pitch_steps),
                Some(InputAction::Quit) => {
                    uart.stop();
                    elwt.exit();
                }
                None => {}
            },
            _ => {}
        },
        Event::DeviceEvent {
            event: DeviceEvent::MouseMotion { delta: (dx, dy) },
            ..
        } => tracker.on_mouse_motion(dx, dy),
        Event::AboutToWait => {
            uart.pump();
            toast.tick(state.window);
            match draw_frame(&mut scene, &mut state, &tracker, &stereo) {
                Ok(()) => state.window.request_redraw(),
                Err(FrameError::Render(RenderError::Surface(wgpu::SurfaceError::Lost))) => {
                    state.resize(state.window.inner_size())
                }
                Err(FrameError::Render(RenderError::Surface(wgpu::SurfaceError::OutOfMemory))) => {
                    log::error!("out of GPU memory");
                    elwt.exit();
                }
                Err(FrameError::Render(RenderError::Surface(e))) => {
                    log::warn!("skipping frame: {e}");
                }
                Err(e) => {
                    log::error!("{e}");
                    elwt.exit();
                }
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
enum FrameError {
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

fn draw_frame(
    scene: &mut PulseScene,
    state: &mut GpuState<'_>,
    tracker: &HeadTracker,
    stereo: &StereoParams,
) -> Result<(), FrameError> {
    let size = state.size();
    let eyes = frame::begin_stereo_frame(scene, &tracker.head_transform(), stereo, size)?;
    let rendered = state.render(&eyes);
    scene.on_finish_frame(&frame::full_viewport(size))?;
    rendered?;
    Ok(())
}
