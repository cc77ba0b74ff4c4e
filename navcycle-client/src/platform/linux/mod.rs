pub mod notify;

use std::path::PathBuf;
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use navcycle_shared::{
    DirectionEntry, NavigationNotification, NotificationChannel, NotificationIdentity,
};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::notify::{ChannelRegistry, PresentMode, Presenter};

/// Freedesktop implementation of the presenter.
///
/// Channels map onto the application name and urgency of the notification.
pub struct LinuxPlatform {
    notifier: Mutex<notify::Notifier>, // single notifier instance
    channel: StdMutex<Option<NotificationChannel>>,
}

impl LinuxPlatform {
    pub fn new(cfg: &ClientConfig) -> Self {
        Self {
            notifier: Mutex::new(notify::Notifier::new(
                cfg.app_name.clone(),
                cfg.desktop_entry.clone(),
                cfg.icon_dir.clone(),
            )),
            channel: StdMutex::new(None),
        }
    }

    /// Channel stored by the last registration, if any.
    pub fn channel(&self) -> Option<NotificationChannel> {
        self.channel
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ChannelRegistry for LinuxPlatform {
    fn register_channel(&self, channel: &NotificationChannel) {
        let mut current = self
            .channel
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if current.as_ref() == Some(channel) {
            debug!(channel=%channel.id, "channel unchanged; skipping registration");
            return;
        }
        info!(
            channel=%channel.id,
            name=%channel.name,
            importance=?channel.importance,
            "notification channel registered"
        );
        *current = Some(channel.clone());
    }
}

#[async_trait]
impl Presenter for LinuxPlatform {
    fn channels(&self) -> Option<&dyn ChannelRegistry> {
        Some(self as &dyn ChannelRegistry)
    }

    async fn present(
        &self,
        mode: PresentMode,
        identity: &NotificationIdentity,
        entry: &DirectionEntry,
    ) {
        let payload = NavigationNotification::for_entry(identity, entry);
        let channel = self.channel();
        self.notifier
            .lock()
            .await
            .show(mode, &payload, channel.as_ref())
            .await;
    }

    async fn withdraw(&self, identity: &NotificationIdentity) {
        self.notifier
            .lock()
            .await
            .close(identity.notification_id)
            .await;
    }
}

/// Whether a session bus is reachable for desktop notifications.
pub fn session_bus_available() -> bool {
    if std::env::var_os("DBUS_SESSION_BUS_ADDRESS").is_some() {
        return true;
    }
    runtime_dir_from_env().is_some_and(|dir| dir.join("bus").exists())
}

fn runtime_dir_from_env() -> Option<PathBuf> {
    std::env::var_os("XDG_RUNTIME_DIR").map(PathBuf::from)
}
