use std::path::{Path, PathBuf};

use navcycle_shared::notification::{Importance, NotificationChannel, TapAction};
use navcycle_shared::{Icon, NavigationNotification};
use notify_rust::{Hint, Timeout, Urgency};
use tracing::{debug, warn};

use crate::notify::{PresentMode, log_payload};

#[derive(Debug)]
enum NotifierKind {
    NotifyRust,
    LogOnly,
}

/// Freedesktop notifier that keeps replacing a single notification id.
#[derive(Debug)]
pub struct Notifier {
    kind: NotifierKind,
    app_name: String,
    desktop_entry: Option<String>,
    icon_dir: Option<PathBuf>,
    handle: Option<notify_rust::NotificationHandle>,
}

impl Notifier {
    pub fn new(app_name: String, desktop_entry: Option<String>, icon_dir: Option<PathBuf>) -> Self {
        // Start optimistic; if we fail to show, we downgrade to LogOnly.
        debug!("Notifier created: using notify-rust backend initially");
        Self {
            kind: NotifierKind::NotifyRust,
            app_name,
            desktop_entry,
            icon_dir,
            handle: None,
        }
    }

    pub async fn show(
        &mut self,
        mode: PresentMode,
        payload: &NavigationNotification,
        channel: Option<&NotificationChannel>,
    ) {
        match self.kind {
            NotifierKind::NotifyRust => {
                debug!(
                    ?mode,
                    replace_id = payload.identity.notification_id,
                    title = %payload.title,
                    "show: building notification"
                );
                let mut n = notify_rust::Notification::new();
                n.appname(channel.map_or(self.app_name.as_str(), |c| c.name.as_str()))
                    .summary(&payload.title)
                    .body(&payload.text)
                    .id(payload.identity.notification_id)
                    .urgency(urgency_for(channel))
                    .timeout(Timeout::Never);
                if let Some(icon) = payload.icon {
                    n.icon(&icon_name(self.icon_dir.as_deref(), icon));
                }
                if payload.ongoing {
                    n.hint(Hint::Resident(true));
                }
                if let Some(category) = payload.category {
                    n.hint(Hint::Category(category.as_str().to_string()));
                }
                if payload.only_alert_once {
                    n.hint(Hint::SuppressSound(true));
                }
                if let (Some(TapAction::OpenApp), Some(entry)) =
                    (payload.tap_action, self.desktop_entry.as_deref())
                {
                    n.hint(Hint::DesktopEntry(entry.to_string()));
                }

                match n.show_async().await {
                    Ok(handle) => {
                        debug!(?mode, "show: notification posted");
                        self.handle = Some(handle);
                    }
                    Err(e) => {
                        warn!(error=%e, "notify-rust failed; downgrading to LogOnly notifier");
                        self.kind = NotifierKind::LogOnly;
                        self.handle = None;
                        log_payload(mode, payload);
                    }
                }
            }
            NotifierKind::LogOnly => log_payload(mode, payload),
        }
    }

    pub async fn close(&mut self, replace_id: u32) {
        if self.handle.take().is_some() {
            debug!("close: replacing with short-timeout notification (async hack)");
            let mut n = notify_rust::Notification::new();
            // Replace current notification with a near-immediate timeout one.
            let _ = n
                .appname(&self.app_name)
                .summary("Navigation ended")
                .id(replace_id)
                .urgency(Urgency::Low)
                .timeout(Timeout::Milliseconds(1))
                .show_async()
                .await;
        }
    }

}

/// Icon path from `icon_dir` when `<resource>.png` exists there, otherwise the
/// freedesktop theme name.
pub fn icon_name(icon_dir: Option<&Path>, icon: Icon) -> String {
    if let Some(dir) = icon_dir {
        let path = dir.join(format!("{}.png", icon.resource_name()));
        if path.exists() {
            return path.display().to_string();
        }
    }
    icon.themed_name().to_string()
}

/// High importance stays at normal urgency; persistence comes from `Timeout::Never`.
pub fn urgency_for(channel: Option<&NotificationChannel>) -> Urgency {
    match channel.map(|c| c.importance) {
        Some(Importance::High) | Some(Importance::Default) | None => Urgency::Normal,
        Some(Importance::Low) => Urgency::Low,
    }
}
