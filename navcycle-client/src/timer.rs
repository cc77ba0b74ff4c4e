use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Work performed each time a [`RepeatingTimer`] fires.
#[async_trait]
pub trait TickHandler: Send + 'static {
    async fn on_tick(&mut self);
}

/// Self-rescheduling timer: waits `period`, runs the handler, waits again.
///
/// Cancellation is only observed while waiting, so a tick that has started
/// always runs to completion. Dropping the timer cancels it.
pub struct RepeatingTimer<H> {
    cancel: CancellationToken,
    handle: JoinHandle<H>,
}

impl<H: TickHandler> RepeatingTimer<H> {
    pub fn spawn(period: Duration, handler: H) -> Self {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(timer_loop(period, handler, cancel.clone()));
        Self { cancel, handle }
    }

    /// Cancel the pending tick without waiting for the task to exit.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Cancel and wait for the task, handing the handler back.
    ///
    /// Returns `None` if the handler panicked.
    pub async fn stop(mut self) -> Option<H> {
        self.cancel.cancel();
        match (&mut self.handle).await {
            Ok(handler) => Some(handler),
            Err(e) => {
                warn!(error=%e, "timer task ended abnormally");
                None
            }
        }
    }
}

impl<H> Drop for RepeatingTimer<H> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn timer_loop<H: TickHandler>(
    period: Duration,
    mut handler: H,
    cancel: CancellationToken,
) -> H {
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(period) => {}
        }
        handler.on_tick().await;
    }
    debug!("repeating timer stopped");
    handler
}
