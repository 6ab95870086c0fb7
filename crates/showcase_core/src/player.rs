//! Background music player controller.
//!
//! Owns the player state and a reference to the external media handle.
//! Provider events are consumed by a single task which also runs the
//! one-shot timer that reveals the controls after the track has loaded.
//! Disposing aborts that task, so a pending reveal never fires afterwards.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Weak,
    },
    time::Duration,
};

use anyhow::{Context, Result};
use media_integration::{
    MediaErrorKind, MediaEvent, MediaHandle, MediaProvider, PlaybackChange, StreamOptions,
};
use shared::protocol::{PlayerPhase, PlayerSnapshot};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError, watch},
    task::JoinHandle,
    time::{self, Instant},
};
use tracing::{debug, error, info, warn};

pub const DEFAULT_VIDEO_ID: &str = "MNcDT53Z5Fs";
pub const CONTROLS_REVEAL_DELAY: Duration = Duration::from_secs(1);
pub const MAX_VOLUME: u8 = 100;

pub struct MediaPlayerController {
    provider: Arc<dyn MediaProvider>,
    options: StreamOptions,
    reveal_delay: Duration,
    state: Arc<watch::Sender<PlayerSnapshot>>,
    handle: Option<Arc<dyn MediaHandle>>,
    events_task: Option<JoinHandle<()>>,
    disposed: Arc<AtomicBool>,
}

impl MediaPlayerController {
    pub fn new(provider: Arc<dyn MediaProvider>, options: StreamOptions) -> Self {
        let (state, _) = watch::channel(PlayerSnapshot::default());
        Self {
            provider,
            options,
            reveal_delay: CONTROLS_REVEAL_DELAY,
            state: Arc::new(state),
            handle: None,
            events_task: None,
            disposed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_reveal_delay(mut self, reveal_delay: Duration) -> Self {
        self.reveal_delay = reveal_delay;
        self
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PlayerSnapshot> {
        self.state.subscribe()
    }

    /// Requests the external handle. A creation failure is returned to the
    /// caller and leaves the player in `Loading`.
    pub async fn start(&mut self) -> Result<()> {
        if self.is_disposed() || self.handle.is_some() {
            return Ok(());
        }
        self.state
            .send_modify(|state| state.phase = PlayerPhase::Loading);

        let session = self
            .provider
            .create(self.options.clone())
            .await
            .with_context(|| format!("failed to create media session for {}", self.options.video_id))
            .inspect_err(|error| error!(%error, "background music unavailable"))?;

        info!(video_id = %self.options.video_id, "media session requested");
        self.handle = Some(Arc::clone(&session.handle));
        self.events_task = Some(tokio::spawn(consume_events(
            Arc::downgrade(&self.state),
            Arc::clone(&self.disposed),
            session.handle,
            session.events,
            self.reveal_delay,
        )));
        Ok(())
    }

    pub fn toggle_play(&self) {
        let Some(handle) = self.ready_handle() else {
            return;
        };
        let playing = self.state.borrow().is_playing;
        let result = if playing { handle.pause() } else { handle.play() };
        match result {
            Ok(()) => {
                self.state.send_modify(|state| state.is_playing = !playing);
            }
            Err(error) => warn!(%error, "toggle play failed"),
        }
    }

    pub fn toggle_mute(&self) {
        let Some(handle) = self.ready_handle() else {
            return;
        };
        let current = self.snapshot();
        if current.is_muted {
            self.unmute(handle.as_ref(), current.volume);
            return;
        }
        match handle.mute() {
            Ok(()) => {
                self.state.send_modify(|state| state.is_muted = true);
            }
            Err(error) => warn!(%error, "mute failed"),
        }
    }

    /// Stores the clamped volume and pushes it only when audible.
    pub fn set_volume(&self, volume: u8) {
        if self.is_disposed() {
            return;
        }
        let volume = volume.min(MAX_VOLUME);
        self.state.send_if_modified(|state| {
            let changed = state.volume != volume;
            state.volume = volume;
            changed
        });

        let Some(handle) = self.ready_handle() else {
            return;
        };
        if self.state.borrow().is_muted {
            return;
        }
        if let Err(error) = handle.set_volume(volume) {
            warn!(%error, volume, "volume change failed");
        }
    }

    /// First pointer interaction unmutes; it never mutes again.
    pub fn handle_first_interaction(&self) {
        let Some(handle) = self.ready_handle() else {
            return;
        };
        let current = self.snapshot();
        if !current.is_muted {
            return;
        }
        self.unmute(handle.as_ref(), current.volume);
    }

    /// The local flag follows the handle's mute state even when restoring
    /// the volume afterwards fails.
    fn unmute(&self, handle: &dyn MediaHandle, volume: u8) {
        if let Err(error) = handle.un_mute() {
            warn!(%error, "unmute failed");
            return;
        }
        self.state.send_modify(|state| state.is_muted = false);
        if let Err(error) = handle.set_volume(volume) {
            warn!(%error, volume, "restoring volume after unmute failed");
        }
    }

    /// Cancels the event task and any pending reveal, then destroys the
    /// handle. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        // Under the state lock, so the event task cannot publish afterwards.
        self.state.send_if_modified(|_| {
            self.disposed.store(true, Ordering::Release);
            false
        });
        if let Some(task) = self.events_task.take() {
            task.abort();
        }
        if let Some(handle) = self.handle.take() {
            if let Err(error) = handle.destroy() {
                warn!(%error, "failed to destroy media handle");
            }
            debug!("media handle released");
        }
    }

    fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    fn ready_handle(&self) -> Option<&Arc<dyn MediaHandle>> {
        if self.is_disposed() || self.state.borrow().phase != PlayerPhase::Ready {
            return None;
        }
        self.handle.as_ref()
    }
}

impl Drop for MediaPlayerController {
    fn drop(&mut self) {
        self.dispose();
    }
}

async fn consume_events(
    state: Weak<watch::Sender<PlayerSnapshot>>,
    disposed: Arc<AtomicBool>,
    handle: Arc<dyn MediaHandle>,
    mut events: broadcast::Receiver<MediaEvent>,
    reveal_delay: Duration,
) {
    let mut reveal_at: Option<Instant> = None;
    loop {
        let deadline = reveal_at;
        let reveal = async move {
            match deadline {
                Some(at) => time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            received = events.recv() => match received {
                Ok(event) => {
                    let Some(state) = state.upgrade() else {
                        break;
                    };
                    if apply_event(&state, &disposed, handle.as_ref(), event) {
                        reveal_at = Some(Instant::now() + reveal_delay);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "media events lagged");
                }
                Err(RecvError::Closed) => break,
            },
            () = reveal => {
                reveal_at = None;
                let Some(state) = state.upgrade() else {
                    break;
                };
                if guarded(&state, &disposed, |state| {
                    state.controls_visible = true;
                    true
                }) {
                    debug!("player controls revealed");
                }
            }
        }
    }
}

/// Returns `true` when the event completed loading and the reveal timer
/// should be armed.
fn apply_event(
    state: &watch::Sender<PlayerSnapshot>,
    disposed: &AtomicBool,
    handle: &dyn MediaHandle,
    event: MediaEvent,
) -> bool {
    match event {
        MediaEvent::Ready => {
            if state.borrow().is_loaded || disposed.load(Ordering::Acquire) {
                return false;
            }
            if let Err(error) = handle.play() {
                warn!(%error, "autoplay request failed");
            }
            let loaded = guarded(state, disposed, |state| {
                state.phase = PlayerPhase::Ready;
                state.is_playing = true;
                state.is_muted = true;
                state.is_loaded = true;
                true
            });
            if loaded {
                info!("background music ready");
            }
            loaded
        }
        MediaEvent::StateChange(change) => {
            let playing = change == PlaybackChange::Playing;
            guarded(state, disposed, |state| {
                let changed = state.is_playing != playing;
                state.is_playing = playing;
                changed
            });
            false
        }
        MediaEvent::Error { code } => {
            error!(code, kind = ?MediaErrorKind::from_code(code), "media provider error");
            false
        }
    }
}

/// Publishes `change` unless the controller was disposed; the flag is read
/// under the same lock `dispose` sets it under.
fn guarded(
    state: &watch::Sender<PlayerSnapshot>,
    disposed: &AtomicBool,
    change: impl FnOnce(&mut PlayerSnapshot) -> bool,
) -> bool {
    state.send_if_modified(|snapshot| !disposed.load(Ordering::Acquire) && change(snapshot))
}

#[cfg(test)]
#[path = "tests/player_tests.rs"]
mod tests;
