use async_trait::async_trait;
use navcycle_shared::notification::NotificationChannel;
use navcycle_shared::{DirectionEntry, NavigationNotification, NotificationIdentity};
use tracing::info;

/// How a presentation relates to what is already on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PresentMode {
    /// First post; marks the process as running something the user can see.
    Foreground,
    /// Replace the notification carrying the same identity.
    Update,
}

/// Named notification channels, for environments that have them.
pub trait ChannelRegistry: Send + Sync {
    /// Registering an unchanged channel again is a no-op.
    fn register_channel(&self, channel: &NotificationChannel);
}

/// Renders direction entries as user-visible notifications.
///
/// Delivery failures are the backend's concern; callers never see them.
#[async_trait]
pub trait Presenter: Send + Sync {
    /// `None` when the environment has no named channels and default
    /// presentation applies.
    fn channels(&self) -> Option<&dyn ChannelRegistry> {
        None
    }

    async fn present(
        &self,
        mode: PresentMode,
        identity: &NotificationIdentity,
        entry: &DirectionEntry,
    );

    /// Remove the notification once nothing updates it anymore.
    async fn withdraw(&self, _identity: &NotificationIdentity) {}
}

/// Presenter that only writes to the log. Used when no desktop backend is
/// available and as the fallback of the desktop backends.
#[derive(Debug, Default)]
pub struct LogPresenter;

impl LogPresenter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Presenter for LogPresenter {
    async fn present(
        &self,
        mode: PresentMode,
        identity: &NotificationIdentity,
        entry: &DirectionEntry,
    ) {
        log_payload(mode, &NavigationNotification::for_entry(identity, entry));
    }

    async fn withdraw(&self, identity: &NotificationIdentity) {
        info!(id = identity.notification_id, "[NAV] notification withdrawn");
    }
}

pub(crate) fn log_payload(mode: PresentMode, payload: &NavigationNotification) {
    info!(
        ?mode,
        id = payload.identity.notification_id,
        silent = payload.only_alert_once,
        "[NAV] {} - {}",
        payload.title,
        payload.text
    );
}
