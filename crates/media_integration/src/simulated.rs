//! In-process stand-in for the streaming provider.
//!
//! Emits `Ready` (or a configured error) after a latency and echoes play and
//! pause requests back as state changes, like the iframe player does.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::{sync::broadcast, task::JoinHandle};
use tracing::{debug, info};

use crate::{
    MediaEvent, MediaHandle, MediaProvider, MediaSession, PlaybackChange, StreamOptions,
};

const EVENT_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy)]
pub struct SimulatedOptions {
    pub ready_latency: Duration,
    /// Emit `Error { code }` instead of `Ready`.
    pub fail_with: Option<i32>,
}

impl Default for SimulatedOptions {
    fn default() -> Self {
        Self {
            ready_latency: Duration::from_millis(400),
            fail_with: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimulatedMediaProvider {
    options: SimulatedOptions,
}

impl SimulatedMediaProvider {
    pub fn new(options: SimulatedOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl MediaProvider for SimulatedMediaProvider {
    async fn create(&self, options: StreamOptions) -> Result<MediaSession> {
        if options.video_id.trim().is_empty() {
            bail!("video id must not be empty");
        }

        let (events, receiver) = broadcast::channel(EVENT_CAPACITY);
        let handle = Arc::new(SimulatedMediaHandle {
            events: events.clone(),
            state: Mutex::new(SimulatedState {
                muted: options.start_muted,
                volume: 100,
                playing: false,
                destroyed: false,
                startup: None,
            }),
        });

        let latency = self.options.ready_latency;
        let startup_event = match self.options.fail_with {
            Some(code) => MediaEvent::Error { code },
            None => MediaEvent::Ready,
        };
        let startup = tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let _ = events.send(startup_event);
        });
        handle.lock().startup = Some(startup);

        info!(video_id = %options.video_id, autoplay = options.autoplay, "simulated media session created");
        Ok(MediaSession {
            handle,
            events: receiver,
        })
    }
}

struct SimulatedState {
    muted: bool,
    volume: u8,
    playing: bool,
    destroyed: bool,
    startup: Option<JoinHandle<()>>,
}

struct SimulatedMediaHandle {
    events: broadcast::Sender<MediaEvent>,
    state: Mutex<SimulatedState>,
}

impl SimulatedMediaHandle {
    fn lock(&self) -> MutexGuard<'_, SimulatedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn live(&self) -> Result<MutexGuard<'_, SimulatedState>> {
        let state = self.lock();
        if state.destroyed {
            bail!("media handle already destroyed");
        }
        Ok(state)
    }

    fn set_playing(&self, playing: bool) -> Result<()> {
        let mut state = self.live()?;
        state.playing = playing;
        drop(state);
        let change = if playing {
            PlaybackChange::Playing
        } else {
            PlaybackChange::Paused
        };
        let _ = self.events.send(MediaEvent::StateChange(change));
        Ok(())
    }
}

impl MediaHandle for SimulatedMediaHandle {
    fn play(&self) -> Result<()> {
        self.set_playing(true)
    }

    fn pause(&self) -> Result<()> {
        self.set_playing(false)
    }

    fn mute(&self) -> Result<()> {
        self.live()?.muted = true;
        Ok(())
    }

    fn un_mute(&self) -> Result<()> {
        self.live()?.muted = false;
        Ok(())
    }

    fn set_volume(&self, volume: u8) -> Result<()> {
        let mut state = self.live()?;
        state.volume = volume.min(100);
        debug!(volume = state.volume, muted = state.muted, "simulated volume set");
        Ok(())
    }

    fn destroy(&self) -> Result<()> {
        let mut state = self.lock();
        if state.destroyed {
            return Ok(());
        }
        state.destroyed = true;
        state.playing = false;
        if let Some(startup) = state.startup.take() {
            startup.abort();
        }
        Ok(())
    }

    fn subscribe_events(&self) -> broadcast::Receiver<MediaEvent> {
        self.events.subscribe()
    }
}
