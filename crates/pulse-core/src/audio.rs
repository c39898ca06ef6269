//! Positional audio seam.
//!
//! The scene talks to an engine through [`SpatialAudio`]; the native frontend
//! backs it with kira, tests with a recorder. The one sound object is created
//! off the render thread and published through a [`SoundSlot`].

use crate::error::AudioError;
use glam::{Quat, Vec3};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

/// Opaque handle to a sound object owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

impl SoundId {
    /// Sentinel an engine never hands out; marks an empty [`SoundSlot`].
    pub const INVALID: SoundId = SoundId(u32::MAX);
}

pub trait SpatialAudio: Send + Sync {
    /// Decode a sound file so later objects can be created without stalls.
    fn preload(&self, file: &str) -> Result<(), AudioError>;
    fn create_object(&self, file: &str) -> Result<SoundId, AudioError>;
    fn set_position(&self, id: SoundId, position: Vec3) -> Result<(), AudioError>;
    fn set_listener_orientation(&self, orientation: Quat);
    fn play(&self, id: SoundId, looped: bool) -> Result<(), AudioError>;
    fn pause(&self);
    fn resume(&self);
}

/// Write-once, lock-free optional sound handle shared between the loader
/// thread and the frame path.
#[derive(Debug)]
pub struct SoundSlot {
    id: AtomicU32,
}

impl Default for SoundSlot {
    fn default() -> Self {
        Self {
            id: AtomicU32::new(SoundId::INVALID.0),
        }
    }
}

impl SoundSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the handle. Only the first call succeeds.
    pub fn publish(&self, id: SoundId) -> Result<(), AudioError> {
        if id == SoundId::INVALID {
            return Err(AudioError::UnknownObject(id.0));
        }
        self.id
            .compare_exchange(SoundId::INVALID.0, id.0, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| AudioError::AlreadyPublished)
    }

    pub fn get(&self) -> Option<SoundId> {
        Some(SoundId(self.id.load(Ordering::Acquire))).filter(|id| *id != SoundId::INVALID)
    }

    pub fn is_ready(&self) -> bool {
        self.get().is_some()
    }
}

/// Load `file`, place it at `position`, start looped playback and publish
/// the handle.
pub fn load_positioned_sound(
    audio: &dyn SpatialAudio,
    slot: &SoundSlot,
    file: &str,
    position: Vec3,
) -> Result<SoundId, AudioError> {
    audio.preload(file)?;
    let id = audio.create_object(file)?;
    audio.set_position(id, position)?;
    audio.play(id, true)?;
    slot.publish(id)?;
    Ok(id)
}

/// Spawn the one-shot background loader so decoding never blocks the first
/// frames. Failures are logged; the slot then stays empty.
pub fn spawn_sound_loader(
    audio: Arc<dyn SpatialAudio>,
    slot: Arc<SoundSlot>,
    file: String,
    position: Vec3,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("sound-loader".into())
        .spawn(move || match load_positioned_sound(audio.as_ref(), &slot, &file, position) {
            Ok(id) => log::info!("sound {file} playing as object {}", id.0),
            Err(e) => log::error!("sound loader: {e}"),
        })
}
