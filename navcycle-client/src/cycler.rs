//! Notification cycler: posts the navigation notification once, then keeps
//! updating it from a repeating timer until stopped.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use navcycle_shared::{NotificationChannel, NotificationIdentity, compute_entry};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::notify::{PresentMode, Presenter};
use crate::timer::{RepeatingTimer, TickHandler};

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

pub struct NotificationCycler {
    presenter: Arc<dyn Presenter>,
    identity: NotificationIdentity,
    channel: NotificationChannel,
    interval: Duration,
    /// Next counter value to display. Only meaningful while stopped; the timer
    /// task owns the live value.
    counter: u64,
    counter_tx: Arc<watch::Sender<u64>>,
    timer: Option<RepeatingTimer<TickState>>,
}

impl NotificationCycler {
    pub fn new(presenter: Arc<dyn Presenter>) -> Self {
        let (counter_tx, _) = watch::channel(0);
        Self {
            presenter,
            identity: NotificationIdentity::navigation(),
            channel: NotificationChannel::navigation(),
            interval: TICK_INTERVAL,
            counter: 0,
            counter_tx: Arc::new(counter_tx),
            timer: None,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| t.is_running())
    }

    /// Current counter value, which equals the number of ticks completed so far.
    pub fn counter(&self) -> u64 {
        *self.counter_tx.borrow()
    }

    /// Observe the counter; it changes once per completed tick.
    pub fn ticks(&self) -> watch::Receiver<u64> {
        self.counter_tx.subscribe()
    }

    /// Post the notification for the current counter and start ticking.
    ///
    /// No-op while already running.
    pub async fn activate(&mut self) {
        if self.is_running() {
            debug!("activate: cycler already running");
            return;
        }
        if let Some(timer) = self.timer.take() {
            // Task ended on its own (handler panic); recover the counter it published.
            warn!("activate: previous timer ended unexpectedly; restarting");
            drop(timer);
            self.counter = self.counter();
        }

        match self.presenter.channels() {
            Some(registry) => {
                debug!(channel=%self.channel.id, "registering notification channel");
                registry.register_channel(&self.channel);
            }
            None => debug!("no named channels; using default presentation"),
        }

        let entry = compute_entry(self.counter);
        self.presenter
            .present(PresentMode::Foreground, &self.identity, &entry)
            .await;

        let state = TickState {
            presenter: self.presenter.clone(),
            identity: self.identity.clone(),
            counter: self.counter,
            counter_tx: self.counter_tx.clone(),
        };
        self.timer = Some(RepeatingTimer::spawn(self.interval, state));
        info!(
            counter = self.counter,
            interval_ms = self.interval.as_millis() as u64,
            "notification cycler running"
        );
    }

    /// Cancel the pending tick and withdraw the notification. Idempotent.
    ///
    /// A tick that is already executing finishes first.
    pub async fn deactivate(&mut self) {
        let Some(timer) = self.timer.take() else {
            debug!("deactivate: cycler not running");
            return;
        };
        self.counter = match timer.stop().await {
            Some(state) => state.counter,
            None => self.counter(),
        };
        self.presenter.withdraw(&self.identity).await;
        info!(counter = self.counter, "notification cycler stopped");
    }
}

struct TickState {
    presenter: Arc<dyn Presenter>,
    identity: NotificationIdentity,
    counter: u64,
    counter_tx: Arc<watch::Sender<u64>>,
}

#[async_trait]
impl TickHandler for TickState {
    async fn on_tick(&mut self) {
        let entry = compute_entry(self.counter);
        debug!(
            counter = self.counter,
            title = entry.title,
            distance = %entry.distance,
            alert_once = entry.alert_once,
            "tick"
        );
        self.presenter
            .present(PresentMode::Update, &self.identity, &entry)
            .await;
        self.counter += 1;
        self.counter_tx.send_replace(self.counter);
    }
}
