use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use navcycle_client::NotificationCycler;
use navcycle_client::notify::{ChannelRegistry, PresentMode, Presenter};
use navcycle_shared::{DirectionEntry, NotificationChannel, NotificationIdentity, compute_entry};
use tokio::time::{Instant, sleep};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Channel(String),
    Present(PresentMode, DirectionEntry),
    Withdraw(u32),
}

#[derive(Default)]
struct RecordingPresenter {
    with_channels: bool,
    /// Simulated delivery latency for updates.
    update_latency: Option<Duration>,
    events: Mutex<Vec<Event>>,
}

impl RecordingPresenter {
    fn with_channels() -> Self {
        Self {
            with_channels: true,
            ..Default::default()
        }
    }

    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn presented(&self, mode: PresentMode) -> Vec<DirectionEntry> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Present(m, entry) if m == mode => Some(entry),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl ChannelRegistry for RecordingPresenter {
    fn register_channel(&self, channel: &NotificationChannel) {
        self.push(Event::Channel(channel.id.to_string()));
    }
}

#[async_trait]
impl Presenter for RecordingPresenter {
    fn channels(&self) -> Option<&dyn ChannelRegistry> {
        if self.with_channels {
            Some(self as &dyn ChannelRegistry)
        } else {
            None
        }
    }

    async fn present(
        &self,
        mode: PresentMode,
        _identity: &NotificationIdentity,
        entry: &DirectionEntry,
    ) {
        if mode == PresentMode::Update {
            if let Some(latency) = self.update_latency {
                sleep(latency).await;
            }
        }
        self.push(Event::Present(mode, *entry));
    }

    async fn withdraw(&self, identity: &NotificationIdentity) {
        self.push(Event::Withdraw(identity.notification_id));
    }
}

fn entries(counters: std::ops::Range<u64>) -> Vec<DirectionEntry> {
    counters.map(compute_entry).collect()
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn activation_posts_foreground_then_updates_once_per_second() {
    let presenter = Arc::new(RecordingPresenter::default());
    let mut cycler = NotificationCycler::new(presenter.clone());

    cycler.activate().await;
    assert!(cycler.is_running());
    assert_eq!(presenter.presented(PresentMode::Foreground), entries(0..1));
    assert!(presenter.presented(PresentMode::Update).is_empty());

    sleep(Duration::from_millis(999)).await;
    assert!(presenter.presented(PresentMode::Update).is_empty());

    sleep(Duration::from_millis(2)).await;
    // First tick repeats counter 0 as an update.
    assert_eq!(presenter.presented(PresentMode::Update), entries(0..1));

    sleep(Duration::from_millis(2500)).await;
    assert_eq!(presenter.presented(PresentMode::Update), entries(0..3));
    assert_eq!(cycler.counter(), 3);

    cycler.deactivate().await;
    assert_eq!(presenter.events().last(), Some(&Event::Withdraw(10101)));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn no_ticks_after_deactivation() {
    let presenter = Arc::new(RecordingPresenter::default());
    let mut cycler = NotificationCycler::new(presenter.clone());

    cycler.activate().await;
    sleep(Duration::from_millis(2500)).await;
    cycler.deactivate().await;
    assert!(!cycler.is_running());
    let updates = presenter.presented(PresentMode::Update).len();
    assert_eq!(updates, 2);

    sleep(Duration::from_secs(10)).await;
    assert_eq!(presenter.presented(PresentMode::Update).len(), updates);
    assert_eq!(cycler.counter(), 2);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn deactivate_is_idempotent() {
    let presenter = Arc::new(RecordingPresenter::default());
    let mut cycler = NotificationCycler::new(presenter.clone());

    cycler.deactivate().await;
    assert!(presenter.events().is_empty());

    cycler.activate().await;
    cycler.deactivate().await;
    cycler.deactivate().await;
    let withdrawals = presenter
        .events()
        .into_iter()
        .filter(|e| matches!(e, Event::Withdraw(_)))
        .count();
    assert_eq!(withdrawals, 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn second_activation_keeps_a_single_pending_tick() {
    let presenter = Arc::new(RecordingPresenter::default());
    let mut cycler = NotificationCycler::new(presenter.clone());

    cycler.activate().await;
    sleep(Duration::from_millis(500)).await;
    cycler.activate().await;
    sleep(Duration::from_millis(3000)).await;

    assert_eq!(presenter.presented(PresentMode::Foreground).len(), 1);
    assert_eq!(presenter.presented(PresentMode::Update), entries(0..3));
    cycler.deactivate().await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn counter_survives_restart() {
    let presenter = Arc::new(RecordingPresenter::default());
    let mut cycler = NotificationCycler::new(presenter.clone());

    cycler.activate().await;
    sleep(Duration::from_millis(12_500)).await;
    cycler.deactivate().await;
    assert_eq!(cycler.counter(), 12);

    cycler.activate().await;
    let foreground = presenter.presented(PresentMode::Foreground);
    assert_eq!(foreground, vec![compute_entry(0), compute_entry(12)]);

    sleep(Duration::from_millis(1001)).await;
    assert_eq!(
        presenter.presented(PresentMode::Update).last(),
        Some(&compute_entry(12))
    );
    assert_eq!(cycler.counter(), 13);
    cycler.deactivate().await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn channel_registered_only_when_supported() {
    let presenter = Arc::new(RecordingPresenter::with_channels());
    let mut cycler = NotificationCycler::new(presenter.clone());
    cycler.activate().await;
    assert_eq!(
        presenter.events(),
        vec![
            Event::Channel("nav_channel_00".into()),
            Event::Present(PresentMode::Foreground, compute_entry(0)),
        ]
    );
    cycler.deactivate().await;

    let presenter = Arc::new(RecordingPresenter::default());
    let mut cycler = NotificationCycler::new(presenter.clone());
    cycler.activate().await;
    assert!(
        !presenter
            .events()
            .iter()
            .any(|e| matches!(e, Event::Channel(_)))
    );
    cycler.deactivate().await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn in_flight_tick_completes_before_stop() {
    let presenter = Arc::new(RecordingPresenter {
        update_latency: Some(Duration::from_millis(500)),
        ..Default::default()
    });
    let mut cycler = NotificationCycler::new(presenter.clone());

    cycler.activate().await;
    // Tick starts at 1000 ms and is still delivering at 1200 ms.
    sleep(Duration::from_millis(1200)).await;
    assert!(presenter.presented(PresentMode::Update).is_empty());

    cycler.deactivate().await;
    assert_eq!(presenter.presented(PresentMode::Update), entries(0..1));
    assert_eq!(cycler.counter(), 1);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn delay_is_measured_from_the_end_of_each_tick() {
    let presenter = Arc::new(RecordingPresenter {
        update_latency: Some(Duration::from_millis(500)),
        ..Default::default()
    });
    let mut cycler = NotificationCycler::new(presenter.clone());
    let mut counter_rx = cycler.ticks();
    let start = Instant::now();

    cycler.activate().await;
    counter_rx.wait_for(|c| *c >= 2).await.unwrap();
    // 1000 wait + 500 delivery, twice.
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(3000), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(3010), "{elapsed:?}");
    cycler.deactivate().await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn full_cycle_walks_the_direction_table() {
    let presenter = Arc::new(RecordingPresenter::default());
    let mut cycler =
        NotificationCycler::new(presenter.clone()).with_interval(Duration::from_millis(10));
    let mut counter_rx = cycler.ticks();

    cycler.activate().await;
    counter_rx.wait_for(|c| *c >= 70).await.unwrap();
    cycler.deactivate().await;

    let updates = presenter.presented(PresentMode::Update);
    assert_eq!(updates.len(), 70);
    assert_eq!(updates[..35], updates[35..]);
    let titles: Vec<&str> = updates
        .iter()
        .filter(|e| !e.alert_once)
        .map(|e| e.title)
        .collect();
    assert_eq!(
        titles,
        [
            "Go Straight",
            "Turn Right",
            "Take 520",
            "Gas Station",
            "Go Straight",
            "Turn Right",
            "Take 520",
            "Gas Station"
        ]
    );
}
