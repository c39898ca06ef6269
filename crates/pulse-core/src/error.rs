use crate::lifecycle::{FrameCall, FramePhase};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("{call} called while {phase}")]
    OutOfOrder { phase: FramePhase, call: FrameCall },
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound asset not found: {0}")]
    MissingAsset(String),
    #[error("failed to decode {file}: {reason}")]
    Decode { file: String, reason: String },
    #[error("unknown sound object {0}")]
    UnknownObject(u32),
    #[error("audio backend error: {0}")]
    Backend(String),
    #[error("sound handle already published")]
    AlreadyPublished,
}

#[derive(Debug, Error)]
pub enum UartError {
    #[error("no bluetooth adapter available")]
    NoAdapter,
    #[error("not connected")]
    NotConnected,
    #[error("bluetooth backend error: {0}")]
    Backend(String),
}
