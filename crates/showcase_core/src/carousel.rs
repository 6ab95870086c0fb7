//! Auto-rotating paginated carousel.
//!
//! One type serves both the contestant and the guest carousel. The periodic
//! rotation runs in its own task that is aborted on [`CarouselController::dispose`]
//! (and on drop). Manual moves never touch the rotation phase, so a manual
//! `next` shortly before a scheduled tick advances twice.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Weak,
    },
    time::Duration,
};

use shared::{
    domain::{RosterItem, RosterKind},
    protocol::CarouselSnapshot,
};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::{debug, trace};

use crate::{error::CarouselError, loader::ReadySignal, pager::Pager};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub page_size: usize,
    /// `Duration::ZERO` disables auto-rotation.
    pub rotation_interval: Duration,
    pub manual_navigation: bool,
}

impl CarouselConfig {
    pub fn contestants() -> Self {
        Self {
            page_size: 4,
            rotation_interval: Duration::from_secs(7),
            manual_navigation: false,
        }
    }

    pub fn guests() -> Self {
        Self {
            page_size: 2,
            rotation_interval: Duration::from_secs(5),
            manual_navigation: true,
        }
    }

    pub fn for_roster(kind: RosterKind) -> Option<Self> {
        match kind {
            RosterKind::Contestants => Some(Self::contestants()),
            RosterKind::Guests => Some(Self::guests()),
            RosterKind::Organizers => None,
        }
    }
}

pub struct CarouselController<T> {
    items: Arc<[T]>,
    config: CarouselConfig,
    pager: Arc<watch::Sender<Pager>>,
    disposed: Arc<AtomicBool>,
    rotation: Option<JoinHandle<()>>,
}

impl<T> CarouselController<T> {
    pub fn new(items: impl Into<Arc<[T]>>, config: CarouselConfig) -> Result<Self, CarouselError> {
        let items = items.into();
        let pager = Pager::new(items.len(), config.page_size)?;
        let (pager, _) = watch::channel(pager);

        Ok(Self {
            items,
            config,
            pager: Arc::new(pager),
            disposed: Arc::new(AtomicBool::new(false)),
            rotation: None,
        })
    }

    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    pub fn pager(&self) -> Pager {
        *self.pager.borrow()
    }

    pub fn current_page(&self) -> usize {
        self.pager.borrow().current_page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.borrow().page_count()
    }

    /// Notified after every page change.
    pub fn subscribe(&self) -> watch::Receiver<Pager> {
        self.pager.subscribe()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    pub fn tick(&self) {
        self.apply(Pager::tick);
    }

    /// Manual prev/next/jump surface; `None` unless enabled in the config.
    pub fn navigation(&self) -> Option<CarouselNavigator<'_, T>> {
        self.config
            .manual_navigation
            .then_some(CarouselNavigator { carousel: self })
    }

    /// Starts rotating immediately.
    pub fn start_rotation(&mut self) {
        self.spawn_rotation(None);
    }

    /// Starts rotating once `ready` fires.
    pub fn start_rotation_after(&mut self, ready: ReadySignal) {
        self.spawn_rotation(Some(ready));
    }

    /// Cancels rotation and freezes the carousel. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        // Under the pager lock, so no rotation tick lands after this returns.
        self.pager.send_if_modified(|_| {
            self.disposed.store(true, Ordering::Release);
            false
        });
        if let Some(rotation) = self.rotation.take() {
            rotation.abort();
            debug!(
                page_size = self.config.page_size,
                "carousel rotation cancelled"
            );
        }
    }

    fn apply(&self, change: impl FnOnce(&mut Pager)) -> bool {
        if self.is_disposed() {
            trace!("ignoring carousel command after dispose");
            return false;
        }
        self.pager.send_modify(change);
        true
    }

    fn jump_to(&self, page: usize) -> Result<(), CarouselError> {
        if self.is_disposed() {
            return Err(CarouselError::Disposed);
        }
        let mut outcome = Ok(());
        self.pager.send_if_modified(|pager| match pager.jump_to(page) {
            Ok(()) => true,
            Err(err) => {
                outcome = Err(err);
                false
            }
        });
        outcome
    }

    fn spawn_rotation(&mut self, ready: Option<ReadySignal>) {
        if self.is_disposed() {
            return;
        }
        if self.rotation.is_some() {
            debug!("carousel rotation already armed");
            return;
        }
        let period = self.config.rotation_interval;
        if period.is_zero() {
            debug!("carousel auto-rotation disabled");
            return;
        }

        let pager = Arc::downgrade(&self.pager);
        let disposed = Arc::clone(&self.disposed);
        self.rotation = Some(tokio::spawn(rotate(pager, disposed, period, ready)));
    }
}

impl<T: Clone> CarouselController<T> {
    pub fn current_slice(&self) -> Vec<T> {
        let range = self.pager.borrow().page_range();
        self.items[range].to_vec()
    }
}

impl CarouselController<RosterItem> {
    pub fn snapshot(&self, section: RosterKind) -> CarouselSnapshot {
        let pager = self.pager();
        CarouselSnapshot {
            section,
            current_page: pager.current_page(),
            page_count: pager.page_count(),
            items: self.items[pager.page_range()].to_vec(),
        }
    }
}

impl<T> Drop for CarouselController<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

async fn rotate(
    pager: Weak<watch::Sender<Pager>>,
    disposed: Arc<AtomicBool>,
    period: Duration,
    ready: Option<ReadySignal>,
) {
    if let Some(ready) = ready {
        if !ready.wait().await {
            debug!("loading gate closed before opening; carousel stays put");
            return;
        }
    }

    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        let Some(pager) = pager.upgrade() else {
            break;
        };
        let rotated = pager.send_if_modified(|pager| {
            if disposed.load(Ordering::Acquire) {
                return false;
            }
            pager.tick();
            true
        });
        if !rotated {
            break;
        }
        trace!(page = pager.borrow().current_page(), "carousel rotated");
    }
}

pub struct CarouselNavigator<'a, T> {
    carousel: &'a CarouselController<T>,
}

impl<T> CarouselNavigator<'_, T> {
    pub fn next(&self) {
        self.carousel.apply(Pager::next);
    }

    pub fn prev(&self) {
        self.carousel.apply(Pager::prev);
    }

    pub fn jump_to(&self, page: usize) -> Result<(), CarouselError> {
        self.carousel.jump_to(page)
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
