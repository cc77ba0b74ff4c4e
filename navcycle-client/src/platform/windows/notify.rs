use navcycle_shared::NavigationNotification;
use tauri_winrt_notification::{Duration, Sound, Toast};
use tracing::{debug, warn};

use crate::notify::{PresentMode, log_payload};

#[derive(Debug)]
enum NotifierKind {
    Toast,
    LogOnly,
}

/// Toast notifier. Windows has no named channels here, so every toast uses
/// the default presentation.
#[derive(Debug)]
pub struct Notifier {
    kind: NotifierKind,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            kind: NotifierKind::Toast,
        }
    }

    pub async fn show(&mut self, mode: PresentMode, payload: &NavigationNotification) {
        match self.kind {
            NotifierKind::Toast => {
                let title = payload.title.clone();
                let text = payload.text.clone();
                let sound = if payload.only_alert_once {
                    None
                } else {
                    Some(Sound::Default)
                };
                let res = tokio::task::spawn_blocking(move || {
                    Toast::new(Toast::POWERSHELL_APP_ID)
                        .title(&title)
                        .text1(&text)
                        .sound(sound)
                        .duration(Duration::Long)
                        .show()
                })
                .await;
                match res {
                    Ok(Ok(())) => debug!(?mode, "toast shown"),
                    Ok(Err(e)) => {
                        warn!(error=?e, "toast failed; downgrading to LogOnly notifier");
                        self.kind = NotifierKind::LogOnly;
                        log_payload(mode, payload);
                    }
                    Err(e) => {
                        warn!(error=%e, "toast task failed; downgrading to LogOnly notifier");
                        self.kind = NotifierKind::LogOnly;
                        log_payload(mode, payload);
                    }
                }
            }
            NotifierKind::LogOnly => log_payload(mode, payload),
        }
    }
}
