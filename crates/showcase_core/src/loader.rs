//! One-shot "loading complete" gate.

use std::time::Duration;

use tokio::{sync::watch, task::JoinHandle};
use tracing::info;

pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(2_500);

/// Waits for a [`LoadingGate`] to open. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ReadySignal {
    rx: watch::Receiver<bool>,
}

impl ReadySignal {
    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves `true` once the gate opens, `false` if the gate is dropped
    /// before it ever opened.
    pub async fn wait(mut self) -> bool {
        if *self.rx.borrow() {
            return true;
        }
        let opened = self.rx.wait_for(|ready| *ready).await.is_ok();
        opened
    }
}

/// Opens exactly once, a fixed delay after it was created.
#[derive(Debug)]
pub struct LoadingGate {
    rx: watch::Receiver<bool>,
    timer: Option<JoinHandle<()>>,
}

impl LoadingGate {
    pub fn after(delay: Duration) -> Self {
        let (tx, rx) = watch::channel(false);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(true);
            info!(delay_ms = delay.as_millis() as u64, "loading complete");
        });

        Self {
            rx,
            timer: Some(timer),
        }
    }

    pub fn signal(&self) -> ReadySignal {
        ReadySignal {
            rx: self.rx.clone(),
        }
    }

    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Stops a pending gate. Waiters that have not seen it open resolve
    /// `false`.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for LoadingGate {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
