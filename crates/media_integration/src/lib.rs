//! Seam to the external streaming media provider.
//!
//! The provider owns actual playback. Consumers create a [`MediaSession`],
//! drive it through [`MediaHandle`] and observe it through the event
//! subscription handed back by [`MediaProvider::create`]. Dropping the
//! receiver unsubscribes.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

mod simulated;

pub use simulated::{SimulatedMediaProvider, SimulatedOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamOptions {
    pub video_id: String,
    pub autoplay: bool,
    pub loop_playback: bool,
    pub native_controls: bool,
    pub start_muted: bool,
}

impl StreamOptions {
    /// Hidden looping background track. Starts muted because autoplay
    /// policies reject unmuted autoplay.
    pub fn background_track(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            autoplay: true,
            loop_playback: true,
            native_controls: false,
            start_muted: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackChange {
    Playing,
    Paused,
}

/// Provider error codes as reported by the YouTube iframe API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaErrorKind {
    InvalidParameter,
    Html5Playback,
    NotFound,
    EmbeddingForbidden,
    Unknown(i32),
}

impl MediaErrorKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => Self::InvalidParameter,
            5 => Self::Html5Playback,
            100 => Self::NotFound,
            101 | 150 => Self::EmbeddingForbidden,
            other => Self::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaEvent {
    Ready,
    StateChange(PlaybackChange),
    Error { code: i32 },
}

pub trait MediaHandle: Send + Sync {
    fn play(&self) -> anyhow::Result<()>;
    fn pause(&self) -> anyhow::Result<()>;
    fn mute(&self) -> anyhow::Result<()>;
    fn un_mute(&self) -> anyhow::Result<()>;
    fn set_volume(&self, volume: u8) -> anyhow::Result<()>;
    fn destroy(&self) -> anyhow::Result<()>;
    fn subscribe_events(&self) -> broadcast::Receiver<MediaEvent>;
}

pub struct MediaSession {
    pub handle: Arc<dyn MediaHandle>,
    /// Subscribed before the provider can emit anything, so `Ready` is never
    /// missed.
    pub events: broadcast::Receiver<MediaEvent>,
}

#[async_trait]
pub trait MediaProvider: Send + Sync {
    async fn create(&self, options: StreamOptions) -> anyhow::Result<MediaSession>;
}
