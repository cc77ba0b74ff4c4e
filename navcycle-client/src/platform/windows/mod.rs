pub mod notify;

use async_trait::async_trait;
use navcycle_shared::{DirectionEntry, NavigationNotification, NotificationIdentity};
use tokio::sync::Mutex;
use tracing::debug;

use crate::notify::{PresentMode, Presenter};

/// Windows implementation of the presenter.
pub struct WindowsPlatform {
    notifier: Mutex<notify::Notifier>,
}

impl WindowsPlatform {
    pub fn new() -> Self {
        Self {
            notifier: Mutex::new(notify::Notifier::new()),
        }
    }
}

impl Default for WindowsPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Presenter for WindowsPlatform {
    async fn present(
        &self,
        mode: PresentMode,
        identity: &NotificationIdentity,
        entry: &DirectionEntry,
    ) {
        let payload = NavigationNotification::for_entry(identity, entry);
        self.notifier.lock().await.show(mode, &payload).await;
    }

    async fn withdraw(&self, identity: &NotificationIdentity) {
        // Toasts expire on their own.
        debug!(id = identity.notification_id, "withdraw: nothing to close (Windows)");
    }
}
