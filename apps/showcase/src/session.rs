//! Owns every controller of the page and routes typed commands to them.

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use media_integration::{MediaProvider, StreamOptions};
use shared::{
    domain::{RosterItem, RosterKind},
    protocol::{PlayerPhase, PlayerSnapshot},
    roster,
};
use showcase_core::{
    CarouselConfig, CarouselController, CarouselError, LoadingGate, MediaPlayerController, Pager,
    ReadySignal,
};
use tokio::sync::watch;
use tracing::debug;

use crate::{
    commands::{ShowcaseCommand, HELP},
    render::ShowcaseView,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(Option<String>),
    Quit,
}

pub struct Showcase {
    gate: LoadingGate,
    contestants: CarouselController<RosterItem>,
    guests: CarouselController<RosterItem>,
    player: MediaPlayerController,
}

impl Showcase {
    /// Carousels start rotating once the loading gate opens.
    pub fn new(
        provider: Arc<dyn MediaProvider>,
        video_id: &str,
        loading_delay: Duration,
    ) -> Result<Self> {
        let gate = LoadingGate::after(loading_delay);

        let mut contestants =
            CarouselController::new(roster::contestants(), CarouselConfig::contestants())?;
        contestants.start_rotation_after(gate.signal());
        let mut guests = CarouselController::new(roster::guests(), CarouselConfig::guests())?;
        guests.start_rotation_after(gate.signal());

        let player = MediaPlayerController::new(provider, StreamOptions::background_track(video_id));

        Ok(Self {
            gate,
            contestants,
            guests,
            player,
        })
    }

    pub async fn start_player(&mut self) -> Result<()> {
        self.player.start().await
    }

    pub fn ready_signal(&self) -> ReadySignal {
        self.gate.signal()
    }

    pub fn watch_contestants(&self) -> watch::Receiver<Pager> {
        self.contestants.subscribe()
    }

    pub fn watch_guests(&self) -> watch::Receiver<Pager> {
        self.guests.subscribe()
    }

    pub fn watch_player(&self) -> watch::Receiver<PlayerSnapshot> {
        self.player.subscribe()
    }

    pub fn view(&self) -> ShowcaseView {
        ShowcaseView::new(
            !self.gate.is_ready(),
            roster::organizers(),
            self.contestants.snapshot(RosterKind::Contestants),
            self.guests.snapshot(RosterKind::Guests),
            self.player.snapshot(),
        )
    }

    pub fn apply(&self, command: ShowcaseCommand) -> Step {
        debug!(?command, "showcase command");
        let status = match command {
            ShowcaseCommand::Next | ShowcaseCommand::Prev | ShowcaseCommand::Page(_) => {
                self.navigate(command)
            }
            ShowcaseCommand::Play => self.player_command(|player| player.toggle_play()),
            ShowcaseCommand::Mute => self.player_command(|player| player.toggle_mute()),
            ShowcaseCommand::Click => self.player_command(|player| player.handle_first_interaction()),
            ShowcaseCommand::Volume(volume) => {
                self.player.set_volume(volume);
                Some(format!("volume set to {volume}"))
            }
            ShowcaseCommand::Help => Some(HELP.to_string()),
            ShowcaseCommand::Quit => return Step::Quit,
        };
        Step::Continue(status)
    }

    fn navigate(&self, command: ShowcaseCommand) -> Option<String> {
        let Some(nav) = self.guests.navigation() else {
            return Some("the guest carousel has no manual navigation".to_string());
        };
        match command {
            ShowcaseCommand::Next => nav.next(),
            ShowcaseCommand::Prev => nav.prev(),
            ShowcaseCommand::Page(page) => match nav.jump_to(page) {
                Ok(()) => {}
                Err(CarouselError::PageOutOfRange { page_count, .. }) => {
                    return Some(format!("there are only {page_count} guest pages"));
                }
                Err(err) => return Some(err.to_string()),
            },
            _ => {}
        }
        None
    }

    fn player_command(&self, run: impl FnOnce(&MediaPlayerController)) -> Option<String> {
        if self.player.snapshot().phase != PlayerPhase::Ready {
            return Some("the player is not ready yet".to_string());
        }
        run(&self.player);
        None
    }

    /// Stops every timer and releases the media handle.
    pub fn dispose(&mut self) {
        self.gate.cancel();
        self.contestants.dispose();
        self.guests.dispose();
        self.player.dispose();
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
