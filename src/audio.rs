//! kira-backed spatial audio.
//!
//! One spatial scene with a single listener at the origin; every sound object
//! gets its own emitter. Decoded sounds are cached by file name so
//! `create_object` after `preload` never touches the disk.

use glam::{Quat, Vec3};
use kira::manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings};
use kira::sound::static_sound::StaticSoundData;
use kira::spatial::emitter::{EmitterHandle, EmitterSettings};
use kira::spatial::listener::{ListenerHandle, ListenerSettings};
use kira::spatial::scene::{SpatialSceneHandle, SpatialSceneSettings};
use kira::tween::Tween;
use pulse_core::{AudioError, SoundId, SpatialAudio};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

struct SoundObject {
    data: StaticSoundData,
    emitter: EmitterHandle,
}

struct AudioState {
    manager: AudioManager<DefaultBackend>,
    scene: SpatialSceneHandle,
    listener: ListenerHandle,
    decoded: HashMap<String, StaticSoundData>,
    objects: HashMap<u32, SoundObject>,
    next_id: u32,
}

pub struct KiraSpatialAudio {
    asset_dir: PathBuf,
    state: Mutex<AudioState>,
}

fn backend<E: std::fmt::Debug>(e: E) -> AudioError {
    AudioError::Backend(format!("{e:?}"))
}

impl KiraSpatialAudio {
    pub fn new(asset_dir: impl Into<PathBuf>) -> Result<Self, AudioError> {
        let mut manager =
            AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()).map_err(backend)?;
        let mut scene = manager
            .add_spatial_scene(SpatialSceneSettings::default())
            .map_err(backend)?;
        let listener = scene
            .add_listener(Vec3::ZERO, Quat::IDENTITY, ListenerSettings::default())
            .map_err(backend)?;
        Ok(Self {
            asset_dir: asset_dir.into(),
            state: Mutex::new(AudioState {
                manager,
                scene,
                listener,
                decoded: HashMap::new(),
                objects: HashMap::new(),
                next_id: 0,
            }),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, AudioState>, AudioError> {
        self.state
            .lock()
            .map_err(|_| AudioError::Backend("audio state poisoned".into()))
    }

    fn decode(&self, file: &str) -> Result<StaticSoundData, AudioError> {
        let path = self.asset_dir.join(file);
        if !path.exists() {
            return Err(AudioError::MissingAsset(path.display().to_string()));
        }
        StaticSoundData::from_file(&path).map_err(|e| AudioError::Decode {
            file: file.to_string(),
            reason: format!("{e:?}"),
        })
    }
}

impl SpatialAudio for KiraSpatialAudio {
    fn preload(&self, file: &str) -> Result<(), AudioError> {
        if self.lock()?.decoded.contains_key(file) {
            return Ok(());
        }
        // Decode without holding the lock; the frame path keeps steering the
        // listener meanwhile.
        let data = self.decode(file)?;
        log::info!("preloaded {file}");
        self.lock()?.decoded.insert(file.to_string(), data);
        Ok(())
    }

    fn create_object(&self, file: &str) -> Result<SoundId, AudioError> {
        let cached = self.lock()?.decoded.get(file).cloned();
        let data = match cached {
            Some(data) => data,
            None => self.decode(file)?,
        };
        let mut state = self.lock()?;
        let emitter = state
            .scene
            .add_emitter(Vec3::ZERO, EmitterSettings::default())
            .map_err(backend)?;
        let id = state.next_id;
        state.next_id += 1;
        state.objects.insert(
            id,
            SoundObject {
                data,
                emitter,
            },
        );
        Ok(SoundId(id))
    }

    fn set_position(&self, id: SoundId, position: Vec3) -> Result<(), AudioError> {
        let mut state = self.lock()?;
        let object = state
            .objects
            .get_mut(&id.0)
            .ok_or(AudioError::UnknownObject(id.0))?;
        object.emitter.set_position(position, Tween::default());
        Ok(())
    }

    fn set_listener_orientation(&self, orientation: Quat) {
        if let Ok(mut state) = self.state.lock() {
            state.listener.set_orientation(orientation, Tween::default());
        }
    }

    fn play(&self, id: SoundId, looped: bool) -> Result<(), AudioError> {
        let mut state = self.lock()?;
        let AudioState {
            manager, objects, ..
        } = &mut *state;
        let object = objects.get_mut(&id.0).ok_or(AudioError::UnknownObject(id.0))?;
        let mut data = object.data.clone().output_destination(&object.emitter);
        if looped {
            data = data.loop_region(..);
        }
        manager.play(data).map_err(backend)?;
        Ok(())
    }

    fn pause(&self) {
        if let Ok(mut state) = self.state.lock() {
            let _ = state.manager.pause(Tween::default());
        }
    }

    fn resume(&self) {
        if let Ok(mut state) = self.state.lock() {
            let _ = state.manager.resume(Tween::default());
        }
    }
}
